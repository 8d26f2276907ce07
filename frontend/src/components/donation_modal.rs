use crate::api::donate;
use crate::env_variable_utils::CONNECTED_WALLET;
use crate::models::DonationRequest;
use crate::state::donation::{DonationForm, PRESETS};
use crate::utils::shorten_hash;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DonationModalProps {
    pub creator: String,
    pub creator_address: String,
    pub on_close: Callback<()>,
}

#[function_component(DonationModal)]
pub fn donation_modal(props: &DonationModalProps) -> Html {
    let form = use_state(DonationForm::default);
    let error_message = use_state(|| None::<String>);

    let on_custom_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            next.set_custom(&e.target_unchecked_into::<HtmlInputElement>().value());
            form.set(next);
        })
    };

    let on_message_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            next.message = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            form.set(next);
        })
    };

    let on_donate = {
        let form = form.clone();
        let error_message = error_message.clone();
        let creator_address = props.creator_address.clone();

        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            if !next.start() {
                return;
            }
            form.set(next.clone());
            error_message.set(None);

            let message = next.message.trim().to_string();
            let request = DonationRequest {
                amount: next.amount().to_string(),
                from: CONNECTED_WALLET.to_string(),
                to: creator_address.clone(),
                message: (!message.is_empty()).then_some(message),
            };

            let form = form.clone();
            let error_message = error_message.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match donate(&request).await {
                    Ok(tx) => {
                        log::info!("Donation {} confirmed: {}", tx.id, tx.tx_hash);
                        next.finish(Some(tx.tx_hash));
                    }
                    Err(e) => {
                        next.finish(None);
                        error_message.set(Some(format!("Donation failed: {}", e)));
                    }
                }
                form.set(next);
            });
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let body = if let Some(tx_hash) = &form.tx_hash {
        html! {
            <div class="text-center">
                <p class="text-green-700 font-semibold mb-2">{"Donation sent!"}</p>
                <p class="text-sm">{ format!("{} ETH to {}", form.amount(), props.creator) }</p>
                <p class="text-xs font-mono">{ shorten_hash(tx_hash, 10) }</p>
            </div>
        }
    } else {
        html! {
            <>
                <div class="grid grid-cols-2 gap-2 mb-3">
                    { for PRESETS.iter().map(|preset| {
                        let selected = form.selected_amount.as_deref() == Some(preset.amount);
                        let onclick = {
                            let form = form.clone();
                            let amount = preset.amount;
                            Callback::from(move |_: MouseEvent| {
                                let mut next = (*form).clone();
                                next.select_preset(amount);
                                form.set(next);
                            })
                        };
                        html! {
                            <button
                                {onclick}
                                class={classes!("p-2", "border", "rounded", selected.then_some("border-blue-600"))}
                            >
                                <div class="font-semibold">{ preset.label }</div>
                                <div class="text-xs">{ preset.description }</div>
                            </button>
                        }
                    })}
                </div>
                <input
                    type="number"
                    step="0.001"
                    class="w-full p-2 border rounded mb-2"
                    placeholder="Custom amount (ETH)"
                    value={form.custom_amount.clone()}
                    oninput={on_custom_input}
                />
                {
                    if let Some(usd) = form.usd_estimate() {
                        html! { <p class="text-xs mb-2">{ format!("≈ ${}", usd) }</p> }
                    } else {
                        html! {}
                    }
                }
                <textarea
                    class="w-full p-2 border rounded mb-2"
                    placeholder="Leave a message (optional)"
                    value={form.message.clone()}
                    oninput={on_message_input}
                />
                {
                    if let Some(msg) = &*error_message {
                        html! { <p class="text-red-600 text-sm mb-2">{ msg }</p> }
                    } else {
                        html! {}
                    }
                }
                <button
                    class="w-full p-2 bg-blue-600 text-white rounded disabled:opacity-50"
                    disabled={!form.can_donate()}
                    onclick={on_donate}
                >
                    { if form.processing { "Processing..." } else { "Donate" } }
                </button>
            </>
        }
    };

    html! {
        <div class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center">
            <div class="bg-white p-6 rounded-lg w-full max-w-md">
                <div class="flex justify-between mb-4">
                    <h2 class="text-lg font-semibold">{ format!("Support {}", props.creator) }</h2>
                    <button onclick={on_close}>{"✕"}</button>
                </div>
                { body }
            </div>
        </div>
    }
}
