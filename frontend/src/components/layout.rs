use crate::env_variable_utils::{get_app_name, CONNECTED_WALLET};
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    html! {
        <nav class="flex items-center justify-between p-4 border-b">
            <Link<Route> to={Route::Home} classes="text-xl font-bold">
                { get_app_name() }
            </Link<Route>>
            <input type="search" class="p-2 border rounded w-1/3" placeholder="Search videos..." />
            <div class="flex items-center gap-4">
                <Link<Route> to={Route::Upload} classes="text-blue-600 hover:underline">
                    {"Upload"}
                </Link<Route>>
                <span class="text-sm font-mono">{ CONNECTED_WALLET }</span>
            </div>
        </nav>
    }
}

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let entries = [
        (Route::Home, "Home"),
        (Route::Upload, "Upload"),
        (Route::Earnings, "Earnings"),
        (Route::Analytics, "Analytics"),
        (Route::Ads, "Ad Marketplace"),
    ];

    html! {
        <aside class="w-48 p-4 border-r">
            <ul class="space-y-2">
                { for entries.into_iter().map(|(route, label)| html! {
                    <li>
                        <Link<Route> to={route} classes="hover:underline">{ label }</Link<Route>>
                    </li>
                })}
            </ul>
        </aside>
    }
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="min-h-screen flex flex-col">
            <Navbar />
            <div class="flex flex-1">
                <Sidebar />
                <main class="flex-1 p-6">
                    { props.children.clone() }
                </main>
            </div>
        </div>
    }
}
