use crate::components::layout::Layout;
use crate::pages::ads::AdsPage;
use crate::pages::analytics::AnalyticsPage;
use crate::pages::earnings::EarningsPage;
use crate::pages::home::HomePage;
use crate::pages::upload::UploadPage;
use crate::pages::watch::WatchPage;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/watch/:id")]
    Watch { id: u32 },
    #[at("/upload")]
    Upload,
    #[at("/earnings")]
    Earnings,
    #[at("/analytics")]
    Analytics,
    #[at("/ads")]
    Ads,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    let page = match routes {
        Route::Home => html! { <HomePage /> },
        Route::Watch { id } => html! { <WatchPage key={id} {id} /> },
        Route::Upload => html! { <UploadPage /> },
        Route::Earnings => html! { <EarningsPage /> },
        Route::Analytics => html! { <AnalyticsPage /> },
        Route::Ads => html! { <AdsPage /> },
        Route::NotFound => html! {
            <div class="flex items-center justify-center">
                <div class="bg-white p-8 rounded-lg shadow-lg text-center">
                    <h1 class="text-2xl font-bold text-gray-800 mb-4">{"404 - Page Not Found"}</h1>
                    <Link<Route> to={Route::Home} classes="text-blue-600 hover:underline">
                        {"Go back home"}
                    </Link<Route>>
                </div>
            </div>
        },
    };

    html! { <Layout>{ page }</Layout> }
}
