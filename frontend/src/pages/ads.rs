use crate::api::{create_campaign, fetch_ad_stats, fetch_campaigns, toggle_campaign};
use crate::models::{AdStats, CampaignStatus};
use crate::pages::earnings::StatCard;
use crate::state::campaigns::{CampaignAction, CampaignBoard, CampaignForm, DURATIONS, TARGET_CATEGORIES};
use crate::utils::format_number;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

async fn refresh_stats(stats: UseStateHandle<Option<AdStats>>) {
    match fetch_ad_stats().await {
        Ok(latest) => stats.set(Some(latest)),
        Err(e) => web_sys::console::warn_1(&format!("Ad stats unavailable: {}", e).into()),
    }
}

#[function_component(AdsPage)]
pub fn ads_page() -> Html {
    let board = use_reducer(CampaignBoard::default);
    let stats = use_state(|| None::<AdStats>);
    let form = use_state(CampaignForm::default);
    let creating = use_state(|| false);
    let error_message = use_state(|| None::<String>);

    {
        let board = board.clone();
        let stats = stats.clone();
        let error_message = error_message.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_campaigns().await {
                    Ok(list) => board.dispatch(CampaignAction::Loaded(list)),
                    Err(e) => error_message.set(Some(format!("Failed to load campaigns: {}", e))),
                }
                refresh_stats(stats).await;
            });
            || ()
        });
    }

    let on_toggle = {
        let board = board.clone();
        let stats = stats.clone();
        let error_message = error_message.clone();

        Callback::from(move |id: u32| {
            let board = board.clone();
            let stats = stats.clone();
            let error_message = error_message.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match toggle_campaign(id).await {
                    Ok(updated) => {
                        board.dispatch(CampaignAction::Updated(updated));
                        refresh_stats(stats).await;
                    }
                    Err(e) => error_message.set(Some(format!("Failed to update campaign: {}", e))),
                }
            });
        })
    };

    let edit = |apply: fn(&mut CampaignForm, String)| {
        let form = form.clone();
        move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        }
    };

    let on_title = {
        let set = edit(|f, v| f.title = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_budget = {
        let set = edit(|f, v| f.budget = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_bid = {
        let set = edit(|f, v| f.bid_amount = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_category = {
        let set = edit(|f, v| f.target_category = v);
        Callback::from(move |e: Event| set(e.target_unchecked_into::<HtmlSelectElement>().value()))
    };
    let on_duration = {
        let set = edit(|f, v| f.duration_days = v.parse().unwrap_or(f.duration_days));
        Callback::from(move |e: Event| set(e.target_unchecked_into::<HtmlSelectElement>().value()))
    };
    let on_description = {
        let set = edit(|f, v| f.description = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlTextAreaElement>().value()))
    };

    let on_create = {
        let form = form.clone();
        let board = board.clone();
        let stats = stats.clone();
        let creating = creating.clone();
        let error_message = error_message.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(request) = form.to_request() else {
                return;
            };
            if *creating {
                return;
            }
            creating.set(true);
            error_message.set(None);

            let form = form.clone();
            let board = board.clone();
            let stats = stats.clone();
            let creating = creating.clone();
            let error_message = error_message.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match create_campaign(&request).await {
                    Ok(campaign) => {
                        board.dispatch(CampaignAction::Created(campaign));
                        form.set(CampaignForm::default());
                        refresh_stats(stats).await;
                    }
                    Err(e) => error_message.set(Some(format!("Failed to create campaign: {}", e))),
                }
                creating.set(false);
            });
        })
    };

    html! {
        <div>
            <h1 class="text-2xl font-bold mb-4">{"Ad Marketplace"}</h1>

            {
                if let Some(msg) = &*error_message {
                    html! { <p class="text-red-600 mb-4">{ msg }</p> }
                } else {
                    html! {}
                }
            }

            {
                if let Some(s) = &*stats {
                    html! {
                        <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mb-6">
                            <StatCard label="Total spent" value={format!("{} $TUBE", s.total_spent)} />
                            <StatCard label="Impressions" value={format_number(s.total_impressions)} />
                            <StatCard label="Average CTR" value={format!("{:.2}%", s.average_ctr)} />
                            <StatCard label="Active / paused" value={format!("{} / {}", s.active_campaigns, s.paused_campaigns)} />
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <table class="w-full text-sm mb-8">
                <thead>
                    <tr>
                        <th>{"Campaign"}</th><th>{"Category"}</th><th>{"Budget"}</th><th>{"Spent"}</th>
                        <th>{"Impressions"}</th><th>{"CTR"}</th><th>{"Ends"}</th><th>{"Status"}</th><th></th>
                    </tr>
                </thead>
                <tbody>
                    { for board.campaigns.iter().map(|campaign| {
                        let onclick = {
                            let on_toggle = on_toggle.clone();
                            let id = campaign.id;
                            Callback::from(move |_: MouseEvent| on_toggle.emit(id))
                        };
                        let action = match campaign.status {
                            CampaignStatus::Active => "Pause",
                            CampaignStatus::Paused => "Resume",
                            CampaignStatus::Completed => "",
                        };
                        html! {
                            <tr key={campaign.id}>
                                <td>{ &campaign.title }</td>
                                <td>{ &campaign.target_category }</td>
                                <td>{ &campaign.budget }</td>
                                <td>{ &campaign.spent }</td>
                                <td>{ format_number(campaign.impressions) }</td>
                                <td>{ format!("{:.2}%", campaign.ctr) }</td>
                                <td>{ &campaign.end_date }</td>
                                <td>{ campaign.status.label() }</td>
                                <td>
                                    {
                                        if campaign.status == CampaignStatus::Completed {
                                            html! {}
                                        } else {
                                            html! { <button {onclick} class="text-blue-600 hover:underline">{ action }</button> }
                                        }
                                    }
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>

            <h2 class="text-lg font-semibold mb-2">{"Create campaign"}</h2>
            <form onsubmit={on_create} class="space-y-3 max-w-xl">
                <input class="w-full p-2 border rounded" placeholder="Campaign title" value={form.title.clone()} oninput={on_title} />
                <div class="flex gap-3">
                    <input type="number" step="any" class="flex-1 p-2 border rounded" placeholder="Budget ($TUBE)" value={form.budget.clone()} oninput={on_budget} />
                    <input type="number" step="any" class="flex-1 p-2 border rounded" placeholder="Bid per view ($TUBE)" value={form.bid_amount.clone()} oninput={on_bid} />
                </div>
                <div class="flex gap-3">
                    <select class="flex-1 p-2 border rounded" onchange={on_category}>
                        <option value="" selected={form.target_category.is_empty()}>{"Any category"}</option>
                        { for TARGET_CATEGORIES.iter().map(|category| html! {
                            <option value={*category} selected={form.target_category == *category}>{ *category }</option>
                        })}
                    </select>
                    <select class="flex-1 p-2 border rounded" onchange={on_duration}>
                        { for DURATIONS.iter().map(|days| html! {
                            <option value={days.to_string()} selected={form.duration_days == *days}>{ format!("{} days", days) }</option>
                        })}
                    </select>
                </div>
                <textarea class="w-full p-2 border rounded" placeholder="Description" value={form.description.clone()} oninput={on_description} />
                <button
                    type="submit"
                    class="px-4 py-2 bg-blue-600 text-white rounded disabled:opacity-50"
                    disabled={*creating || !form.is_complete()}
                >
                    { if *creating { "Creating..." } else { "Launch Campaign" } }
                </button>
            </form>
        </div>
    }
}
