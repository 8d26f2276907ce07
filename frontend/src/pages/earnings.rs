use crate::api::{fetch_earnings, fetch_payouts, fetch_token_price, fetch_top_videos, withdraw};
use crate::env_variable_utils::CONNECTED_WALLET;
use crate::models::{CreatorEarnings, EarningVideo, Payout, TokenPrice, WithdrawRequest};
use crate::utils::{format_number, format_payout_date, parse_positive, shorten_hash};
use yew::prelude::*;

#[function_component(EarningsPage)]
pub fn earnings_page() -> Html {
    let earnings = use_state(|| None::<CreatorEarnings>);
    let payouts = use_state(Vec::<Payout>::new);
    let top_videos = use_state(Vec::<EarningVideo>::new);
    let price = use_state(|| None::<TokenPrice>);
    let withdrawing = use_state(|| false);
    let error_message = use_state(|| None::<String>);
    let success_message = use_state(|| None::<String>);

    {
        let earnings = earnings.clone();
        let payouts = payouts.clone();
        let top_videos = top_videos.clone();
        let price = price.clone();
        let error_message = error_message.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_earnings(CONNECTED_WALLET).await {
                    Ok(summary) => earnings.set(Some(summary)),
                    Err(e) => error_message.set(Some(format!("Failed to load earnings: {}", e))),
                }
                if let Ok(list) = fetch_payouts(CONNECTED_WALLET).await {
                    payouts.set(list);
                }
                if let Ok(list) = fetch_top_videos(CONNECTED_WALLET).await {
                    top_videos.set(list);
                }
                if let Ok(quote) = fetch_token_price().await {
                    price.set(Some(quote));
                }
            });
            || ()
        });
    }

    let on_withdraw = {
        let earnings = earnings.clone();
        let withdrawing = withdrawing.clone();
        let error_message = error_message.clone();
        let success_message = success_message.clone();

        Callback::from(move |_: MouseEvent| {
            let Some(summary) = &*earnings else {
                return;
            };
            if *withdrawing || parse_positive(&summary.pending_payouts).is_none() {
                return;
            }
            let request = WithdrawRequest {
                creator_address: CONNECTED_WALLET.to_string(),
                amount: summary.pending_payouts.clone(),
            };
            withdrawing.set(true);
            error_message.set(None);
            success_message.set(None);

            let withdrawing = withdrawing.clone();
            let error_message = error_message.clone();
            let success_message = success_message.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match withdraw(&request).await {
                    Ok(tx) => success_message.set(Some(format!(
                        "Withdrew {} ETH ({})",
                        tx.amount,
                        shorten_hash(&tx.tx_hash, 10)
                    ))),
                    Err(e) => error_message.set(Some(format!("Withdrawal failed: {}", e))),
                }
                withdrawing.set(false);
            });
        })
    };

    let summary = match &*earnings {
        Some(summary) => html! {
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mb-6">
                <StatCard label="Total earnings" value={format!("{} ETH", summary.total_earnings)} />
                <StatCard label="This month" value={format!("{} ETH", summary.monthly_earnings)} />
                <StatCard label="Pending payouts" value={format!("{} ETH", summary.pending_payouts)} />
                <StatCard label="Total views" value={format_number(summary.total_views)} />
                <StatCard label="Avg. per view" value={format!("{} ETH", summary.average_view_payout)} />
                <StatCard label="Last payout" value={format_payout_date(&summary.last_payout_date)} />
                {
                    if let Some(quote) = &*price {
                        html! { <StatCard label={quote.symbol.clone()} value={format!("${}", quote.usd)} /> }
                    } else {
                        html! {}
                    }
                }
            </div>
        },
        None => html! { <p>{"Loading earnings..."}</p> },
    };

    html! {
        <div>
            <div class="flex justify-between items-center mb-4">
                <h1 class="text-2xl font-bold">{"Creator Earnings"}</h1>
                <button
                    class="px-4 py-2 bg-green-600 text-white rounded disabled:opacity-50"
                    disabled={*withdrawing || earnings.is_none()}
                    onclick={on_withdraw}
                >
                    { if *withdrawing { "Withdrawing..." } else { "Withdraw" } }
                </button>
            </div>

            {
                if let Some(msg) = &*error_message {
                    html! { <p class="text-red-600 mb-4">{ msg }</p> }
                } else {
                    html! {}
                }
            }
            {
                if let Some(msg) = &*success_message {
                    html! { <p class="text-green-700 mb-4">{ msg }</p> }
                } else {
                    html! {}
                }
            }

            { summary }

            <h2 class="text-lg font-semibold mb-2">{"Recent payouts"}</h2>
            <table class="w-full text-sm mb-6">
                <thead>
                    <tr><th>{"Date"}</th><th>{"Type"}</th><th>{"Amount"}</th><th>{"Status"}</th><th>{"Tx"}</th></tr>
                </thead>
                <tbody>
                    { for payouts.iter().map(|payout| html! {
                        <tr key={payout.id}>
                            <td>{ format_payout_date(&payout.date) }</td>
                            <td>{ &payout.kind }</td>
                            <td>{ format!("{} ETH", payout.amount) }</td>
                            <td>{ &payout.status }</td>
                            <td class="font-mono">{ shorten_hash(&payout.tx_hash, 10) }</td>
                        </tr>
                    })}
                </tbody>
            </table>

            <h2 class="text-lg font-semibold mb-2">{"Top earning videos"}</h2>
            <ul class="space-y-2">
                { for top_videos.iter().map(|video| html! {
                    <li key={video.id} class="flex items-center gap-3">
                        <img src={video.thumbnail.clone()} alt={video.title.clone()} class="w-24 rounded" />
                        <div>
                            <p class="font-semibold">{ &video.title }</p>
                            <p class="text-xs">{ format!("{} views · {}", video.views, video.earnings) }</p>
                        </div>
                    </li>
                })}
            </ul>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub label: AttrValue,
    pub value: AttrValue,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="p-4 border rounded">
            <p class="text-xs text-gray-500">{ &props.label }</p>
            <p class="text-lg font-semibold">{ &props.value }</p>
        </div>
    }
}
