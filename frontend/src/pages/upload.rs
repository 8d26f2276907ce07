use crate::api::{fetch_upload, forget_upload, pin_video, start_upload, upload_thumbnail};
use crate::models::{PinnedFile, UploadJob, UploadProgress, UploadStage};
use crate::state::upload_form::{FormRejection, SelectedFile, UploadForm, CATEGORIES};
use crate::utils::shorten_hash;
use gloo_timers::future::TimeoutFuture;
use std::rc::Rc;
use web_sys::{window, File, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

const POLL_INTERVAL_MS: u32 = 500;
const FAILURE_MESSAGE: &str = "Upload failed. Please try again.";

pub enum UploadAction {
    Select(SelectedFile),
    Pinned(PinnedFile),
    Title(String),
    Description(String),
    Category(String),
    Tags(String),
    Thumbnail(String),
    Monetization(bool),
    NftPrice(String),
    Progress(UploadProgress),
    Reset,
}

impl Reducible for UploadForm {
    type Action = UploadAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            UploadAction::Select(file) => {
                if next.select_file(file).is_err() {
                    return self;
                }
            }
            UploadAction::Pinned(pinned) => {
                if !next.attach_pin(pinned) {
                    return self;
                }
            }
            UploadAction::Title(value) => next.title = value,
            UploadAction::Description(value) => next.description = value,
            UploadAction::Category(value) => next.category = value,
            UploadAction::Tags(value) => next.tags = value,
            UploadAction::Thumbnail(hash) => next.thumbnail_hash = Some(hash),
            UploadAction::Monetization(enabled) => next.monetization = enabled,
            UploadAction::NftPrice(value) => next.nft_price = value,
            UploadAction::Progress(progress) => {
                if !next.apply_progress(progress) {
                    return self;
                }
            }
            UploadAction::Reset => next.reset(),
        }
        next.into()
    }
}

fn alert(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

fn first_file(e: &Event) -> Option<File> {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.files().and_then(|files| files.get(0))
}

fn failed(message: &str) -> UploadProgress {
    UploadProgress {
        stage: UploadStage::Error,
        progress: 0,
        message: message.to_string(),
    }
}

/// Follows a job until it finishes, replaying every checkpoint in order.
async fn follow_job(
    job_id: String,
    form: UseReducerHandle<UploadForm>,
    job: UseStateHandle<Option<UploadJob>>,
) {
    let mut applied = 0;
    loop {
        TimeoutFuture::new(POLL_INTERVAL_MS).await;
        let current = match fetch_upload(&job_id).await {
            Ok(current) => current,
            Err(e) => {
                web_sys::console::error_1(&format!("Polling upload {} failed: {}", job_id, e).into());
                form.dispatch(UploadAction::Progress(failed(FAILURE_MESSAGE)));
                return;
            }
        };

        for checkpoint in current.history.iter().skip(applied) {
            form.dispatch(UploadAction::Progress(checkpoint.clone()));
        }
        applied = current.history.len();

        let finished = matches!(
            current.progress.stage,
            UploadStage::Complete | UploadStage::Error
        );
        job.set(Some(current));
        if finished {
            return;
        }
    }
}

#[function_component(UploadPage)]
pub fn upload_page() -> Html {
    let form = use_reducer(UploadForm::default);
    let job = use_state(|| None::<UploadJob>);
    let pinning = use_state(|| false);
    let in_flight = use_mut_ref(|| false);
    let error_message = use_state(|| None::<String>);

    let on_video_change = {
        let form = form.clone();
        let pinning = pinning.clone();
        let error_message = error_message.clone();

        Callback::from(move |e: Event| {
            let Some(file) = first_file(&e) else {
                return;
            };
            let selected = SelectedFile {
                name: file.name(),
                content_type: file.type_(),
                size: file.size() as u64,
            };
            if let Err(rejection) = (*form).clone().select_file(selected.clone()) {
                alert(rejection.message());
                return;
            }
            form.dispatch(UploadAction::Select(selected));
            error_message.set(None);
            pinning.set(true);

            let form = form.clone();
            let pinning = pinning.clone();
            let error_message = error_message.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match pin_video(&file).await {
                    Ok(pinned) => form.dispatch(UploadAction::Pinned(pinned)),
                    Err(e) => error_message.set(Some(format!("Failed to pin video: {}", e))),
                }
                pinning.set(false);
            });
        })
    };

    let on_thumbnail_change = {
        let form = form.clone();
        let error_message = error_message.clone();

        Callback::from(move |e: Event| {
            let Some(file) = first_file(&e) else {
                return;
            };
            if !file.type_().starts_with("image/") {
                alert("Please select a valid image file");
                return;
            }
            let form = form.clone();
            let error_message = error_message.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match upload_thumbnail(&file).await {
                    Ok(result) => form.dispatch(UploadAction::Thumbnail(result.hash)),
                    Err(e) => error_message.set(Some(format!("Failed to upload thumbnail: {}", e))),
                }
            });
        })
    };

    let on_title = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            form.dispatch(UploadAction::Title(
                e.target_unchecked_into::<HtmlInputElement>().value(),
            ))
        })
    };

    let on_description = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            form.dispatch(UploadAction::Description(
                e.target_unchecked_into::<HtmlTextAreaElement>().value(),
            ))
        })
    };

    let on_category = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            form.dispatch(UploadAction::Category(
                e.target_unchecked_into::<HtmlSelectElement>().value(),
            ))
        })
    };

    let on_tags = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            form.dispatch(UploadAction::Tags(
                e.target_unchecked_into::<HtmlInputElement>().value(),
            ))
        })
    };

    let on_monetization = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            form.dispatch(UploadAction::Monetization(
                e.target_unchecked_into::<HtmlInputElement>().checked(),
            ))
        })
    };

    let on_nft_price = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            form.dispatch(UploadAction::NftPrice(
                e.target_unchecked_into::<HtmlInputElement>().value(),
            ))
        })
    };

    let on_submit = {
        let form = form.clone();
        let job = job.clone();
        let in_flight = in_flight.clone();
        let error_message = error_message.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *in_flight.borrow() {
                return;
            }
            let mut draft = (*form).clone();
            let request = match draft.begin_submit() {
                Ok(request) => request,
                Err(FormRejection::Busy) => return,
                Err(rejection) => {
                    alert(rejection.message());
                    return;
                }
            };
            *in_flight.borrow_mut() = true;
            form.dispatch(UploadAction::Progress(draft.progress));
            error_message.set(None);

            let form = form.clone();
            let job = job.clone();
            let in_flight = in_flight.clone();
            let error_message = error_message.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match start_upload(&request).await {
                    Ok(started) => {
                        let job_id = started.id.clone();
                        job.set(Some(started));
                        follow_job(job_id, form, job).await;
                    }
                    Err(e) => {
                        error_message.set(Some(e));
                        form.dispatch(UploadAction::Progress(failed(FAILURE_MESSAGE)));
                    }
                }
                *in_flight.borrow_mut() = false;
            });
        })
    };

    let on_reset = {
        let form = form.clone();
        let job = job.clone();
        let error_message = error_message.clone();

        Callback::from(move |_: MouseEvent| {
            if let Some(finished) = &*job {
                let job_id = finished.id.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(e) = forget_upload(&job_id).await {
                        web_sys::console::warn_1(&format!("Could not forget upload {}: {}", job_id, e).into());
                    }
                });
            }
            job.set(None);
            error_message.set(None);
            form.dispatch(UploadAction::Reset);
        })
    };

    let busy = form.is_busy();
    let stage = form.progress.stage;

    let progress_panel = match stage {
        UploadStage::Idle => html! {},
        UploadStage::Complete => {
            let field = |pick: fn(&UploadJob) -> Option<&String>| {
                (*job)
                    .as_ref()
                    .and_then(pick)
                    .map(|value| shorten_hash(value, 10))
                    .unwrap_or_default()
            };
            html! {
                <div class="p-4 bg-green-50 border border-green-300 rounded mb-4">
                    <p class="font-semibold text-green-700">{ &form.progress.message }</p>
                    <p class="text-sm font-mono">{ format!("IPFS: {}", field(|j| j.ipfs_hash.as_ref())) }</p>
                    <p class="text-sm font-mono">{ format!("NFT token: #{}", field(|j| j.nft_token_id.as_ref())) }</p>
                    <p class="text-sm font-mono">{ format!("Transaction: {}", field(|j| j.transaction_hash.as_ref())) }</p>
                    <button class="mt-3 px-4 py-2 bg-blue-600 text-white rounded" onclick={on_reset.clone()}>
                        {"Upload Another Video"}
                    </button>
                </div>
            }
        }
        UploadStage::Error => html! {
            <div class="p-4 bg-red-50 border border-red-300 rounded mb-4">
                <p class="text-red-700">{ &form.progress.message }</p>
                <button class="mt-3 px-4 py-2 border rounded" onclick={on_reset.clone()}>
                    {"Start over"}
                </button>
            </div>
        },
        _ => html! {
            <div class="mb-4">
                <div class="w-full bg-gray-200 rounded h-3">
                    <div class="bg-blue-600 h-3 rounded" style={format!("width: {}%", form.progress.progress)} />
                </div>
                <p class="text-sm mt-1">{ format!("{}% · {}", form.progress.progress, form.progress.message) }</p>
            </div>
        },
    };

    html! {
        <div class="max-w-2xl mx-auto">
            <h1 class="text-2xl font-bold mb-4">{"Upload Video"}</h1>

            { progress_panel }

            {
                if let Some(msg) = &*error_message {
                    html! { <p class="text-red-600 mb-4">{ msg }</p> }
                } else {
                    html! {}
                }
            }

            <form onsubmit={on_submit} class="space-y-4">
                <div>
                    <label class="block font-semibold">{"Video file"}</label>
                    <input type="file" accept="video/*" onchange={on_video_change} disabled={busy} />
                    {
                        match (&form.file, &form.pinned) {
                            (Some(_), Some(pinned)) => html! {
                                <p class="text-xs text-green-700">{ format!("Pinned as {}", shorten_hash(&pinned.cid, 8)) }</p>
                            },
                            (Some(file), None) if *pinning => html! {
                                <p class="text-xs">{ format!("Pinning {}...", file.name) }</p>
                            },
                            (Some(file), None) => html! {
                                <p class="text-xs">{ format!("{} ({} bytes)", file.name, file.size) }</p>
                            },
                            _ => html! {},
                        }
                    }
                </div>

                <div>
                    <label class="block font-semibold">{"Thumbnail"}</label>
                    <input type="file" accept="image/*" onchange={on_thumbnail_change} disabled={busy} />
                    {
                        if let Some(hash) = &form.thumbnail_hash {
                            html! { <p class="text-xs">{ format!("Thumbnail {}", shorten_hash(hash, 8)) }</p> }
                        } else {
                            html! {}
                        }
                    }
                </div>

                <input
                    class="w-full p-2 border rounded"
                    placeholder="Title"
                    value={form.title.clone()}
                    oninput={on_title}
                    disabled={busy}
                />
                <textarea
                    class="w-full p-2 border rounded"
                    placeholder="Description"
                    value={form.description.clone()}
                    oninput={on_description}
                    disabled={busy}
                />
                <select class="w-full p-2 border rounded" onchange={on_category} disabled={busy}>
                    <option value="" selected={form.category.is_empty()}>{"Select a category"}</option>
                    { for CATEGORIES.iter().map(|category| html! {
                        <option value={*category} selected={form.category == *category}>{ *category }</option>
                    })}
                </select>
                <input
                    class="w-full p-2 border rounded"
                    placeholder="Tags (comma separated)"
                    value={form.tags.clone()}
                    oninput={on_tags}
                    disabled={busy}
                />
                <label class="flex items-center gap-2">
                    <input type="checkbox" checked={form.monetization} onchange={on_monetization} disabled={busy} />
                    {"Enable view-based monetization"}
                </label>
                <div>
                    <label class="block font-semibold">{"NFT price (ETH)"}</label>
                    <input
                        type="number"
                        step="0.01"
                        class="w-full p-2 border rounded"
                        value={form.nft_price.clone()}
                        oninput={on_nft_price}
                        disabled={busy}
                    />
                </div>

                <button
                    type="submit"
                    class="w-full p-2 bg-blue-600 text-white rounded disabled:opacity-50"
                    disabled={stage != UploadStage::Idle}
                >
                    { if busy { "Uploading..." } else { "Upload & Mint NFT" } }
                </button>
            </form>
        </div>
    }
}
