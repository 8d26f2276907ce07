use crate::api::fetch_analytics;
use crate::models::AnalyticsOverview;
use crate::pages::earnings::StatCard;
use crate::utils::format_number;
use yew::prelude::*;

#[function_component(AnalyticsPage)]
pub fn analytics_page() -> Html {
    let overview = use_state(|| None::<AnalyticsOverview>);
    let error_message = use_state(|| None::<String>);

    {
        let overview = overview.clone();
        let error_message = error_message.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_analytics().await {
                    Ok(data) => overview.set(Some(data)),
                    Err(e) => error_message.set(Some(format!("Failed to load analytics: {}", e))),
                }
            });
            || ()
        });
    }

    let Some(data) = &*overview else {
        return match &*error_message {
            Some(msg) => html! { <p class="text-red-600">{ msg }</p> },
            None => html! { <p>{"Loading analytics..."}</p> },
        };
    };

    html! {
        <div>
            <h1 class="text-2xl font-bold mb-4">{"Channel Analytics"}</h1>

            <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mb-6">
                { for data.metrics.iter().map(|metric| html! {
                    <StatCard
                        label={metric.label.clone()}
                        value={format!("{} ({})", metric.value, metric.change)}
                    />
                })}
            </div>

            <div class="grid md:grid-cols-2 gap-6 mb-6">
                <section>
                    <h2 class="font-semibold mb-2">{"Views & earnings"}</h2>
                    <table class="w-full text-sm">
                        <thead><tr><th>{"Month"}</th><th>{"Views"}</th><th>{"Earnings"}</th></tr></thead>
                        <tbody>
                            { for data.views.iter().map(|point| html! {
                                <tr>
                                    <td>{ &point.date }</td>
                                    <td>{ format_number(point.views) }</td>
                                    <td>{ format_number(point.earnings) }</td>
                                </tr>
                            })}
                        </tbody>
                    </table>
                </section>

                <section>
                    <h2 class="font-semibold mb-2">{"Engagement"}</h2>
                    <table class="w-full text-sm">
                        <thead><tr><th>{"Month"}</th><th>{"Likes"}</th><th>{"Comments"}</th><th>{"Shares"}</th></tr></thead>
                        <tbody>
                            { for data.engagement.iter().map(|point| html! {
                                <tr>
                                    <td>{ &point.date }</td>
                                    <td>{ format_number(point.likes) }</td>
                                    <td>{ format_number(point.comments) }</td>
                                    <td>{ format_number(point.shares) }</td>
                                </tr>
                            })}
                        </tbody>
                    </table>
                </section>
            </div>

            <section class="mb-6">
                <h2 class="font-semibold mb-2">{"Audience"}</h2>
                { for data.audience.iter().map(|slice| html! {
                    <div class="flex items-center gap-2 mb-1">
                        <span class="w-32 text-sm">{ &slice.name }</span>
                        <div class="h-3 rounded" style={format!("width: {}%; background: {}", slice.value, slice.color)} />
                        <span class="text-xs">{ format!("{}%", slice.value) }</span>
                    </div>
                })}
            </section>

            <section>
                <h2 class="font-semibold mb-2">{"Top videos"}</h2>
                <ul class="space-y-2">
                    { for data.top_videos.iter().map(|video| html! {
                        <li class="flex items-center gap-3">
                            <img src={video.thumbnail.clone()} alt={video.title.clone()} class="w-24 rounded" />
                            <div>
                                <p class="font-semibold">{ &video.title }</p>
                                <p class="text-xs">
                                    { format!(
                                        "{} views · {} $TUBE · {}% engagement",
                                        format_number(video.views),
                                        format_number(video.earnings),
                                        video.engagement
                                    ) }
                                </p>
                            </div>
                        </li>
                    })}
                </ul>
            </section>
        </div>
    }
}
