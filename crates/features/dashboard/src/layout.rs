use crate::Route;
use crate::components::LogoutButton;
use bhub_i18n::Bundle;
use bhub_notify::ToastHost;
use dioxus::prelude::*;

/// Shared chrome for the dashboard sections: section navigation, the
/// sign-out control and the toast host around an [`Outlet`] for the page body.
#[component]
pub fn DashboardLayout() -> Element {
    let bundle = use_context::<Bundle>();
    let budgets = bundle.text("dashboard.budgets.title").to_owned();
    let goals = bundle.text("dashboard.goals.title").to_owned();
    let settings = bundle.text("dashboard.settings.title").to_owned();

    rsx! {
        div { class: "dashboard",
            header { class: "dashboard-header",
                nav { class: "dashboard-nav",
                    Link { class: "dashboard-nav-link", to: Route::Budgets {}, "{budgets}" }
                    Link { class: "dashboard-nav-link", to: Route::Goals {}, "{goals}" }
                    Link { class: "dashboard-nav-link", to: Route::Settings {}, "{settings}" }
                }
                LogoutButton {}
            }
            main { class: "dashboard-content", Outlet::<Route> {} }
            ToastHost {}
        }
    }
}
