use bhub_domain::config::SessionConfig;
use bhub_identity::init;

#[test]
fn init_creates_slice() {
    let slice = init(&SessionConfig::default()).expect("init should succeed");
    assert_eq!(slice.id, std::any::TypeId::of::<bhub_identity::Identity>());
}
