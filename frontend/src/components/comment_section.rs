use crate::api::{fetch_comments, like_comment, post_comment};
use crate::models::Comment;
use crate::state::comments::{CommentAction, CommentThread};
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CommentSectionProps {
    pub video_id: u32,
}

#[function_component(CommentSection)]
pub fn comment_section(props: &CommentSectionProps) -> Html {
    let thread = use_reducer(CommentThread::default);
    let error_message = use_state(|| None::<String>);

    {
        let thread = thread.clone();
        let error_message = error_message.clone();

        use_effect_with(props.video_id, move |video_id| {
            let video_id = *video_id;
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_comments(video_id).await {
                    Ok(comments) => thread.dispatch(CommentAction::Loaded(comments)),
                    Err(e) => error_message.set(Some(format!("Failed to load comments: {}", e))),
                }
            });
            || ()
        });
    }

    let on_draft_input = {
        let thread = thread.clone();
        Callback::from(move |e: InputEvent| {
            thread.dispatch(CommentAction::Draft(
                e.target_unchecked_into::<HtmlTextAreaElement>().value(),
            ))
        })
    };

    let on_submit = {
        let thread = thread.clone();
        let error_message = error_message.clone();
        let video_id = props.video_id;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(content) = (*thread).clone().begin_submit() else {
                return;
            };
            thread.dispatch(CommentAction::Submit);
            error_message.set(None);

            let thread = thread.clone();
            let error_message = error_message.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match post_comment(video_id, &content).await {
                    Ok(posted) => thread.dispatch(CommentAction::Posted(posted)),
                    Err(e) => {
                        thread.dispatch(CommentAction::Posted(None));
                        error_message.set(Some(format!("Failed to post comment: {}", e)));
                    }
                }
            });
        })
    };

    let on_like = {
        let thread = thread.clone();
        let error_message = error_message.clone();
        let video_id = props.video_id;

        Callback::from(move |comment_id: u32| {
            let thread = thread.clone();
            let error_message = error_message.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match like_comment(video_id, comment_id).await {
                    Ok(updated) => thread.dispatch(CommentAction::Liked(updated)),
                    Err(e) => error_message.set(Some(format!("Failed to like comment: {}", e))),
                }
            });
        })
    };

    html! {
        <section class="mt-6">
            <h2 class="text-lg font-semibold mb-2">
                { format!("{} Comments", thread.comments.len()) }
            </h2>
            <p class="text-xs text-green-700 mb-2">
                {"Comments are verified with zero-knowledge proofs"}
            </p>

            <form onsubmit={on_submit} class="mb-4">
                <textarea
                    class="w-full p-2 border rounded"
                    placeholder="Add a comment..."
                    value={thread.draft.clone()}
                    oninput={on_draft_input}
                    disabled={thread.submitting}
                />
                <button
                    type="submit"
                    class="mt-2 px-4 py-1 bg-blue-600 text-white rounded disabled:opacity-50"
                    disabled={thread.submitting || thread.draft.trim().is_empty()}
                >
                    { if thread.submitting { "Posting..." } else { "Comment" } }
                </button>
            </form>

            {
                if let Some(msg) = &*error_message {
                    html! { <p class="text-red-600 mb-2">{ msg }</p> }
                } else {
                    html! {}
                }
            }

            <ul class="space-y-3">
                { for thread.comments.iter().map(|comment| html! {
                    <CommentItem key={comment.id} comment={comment.clone()} on_like={on_like.clone()} />
                })}
            </ul>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct CommentItemProps {
    comment: Comment,
    on_like: Callback<u32>,
}

#[function_component(CommentItem)]
fn comment_item(props: &CommentItemProps) -> Html {
    let comment = &props.comment;
    let onclick = {
        let on_like = props.on_like.clone();
        let id = comment.id;
        Callback::from(move |_| on_like.emit(id))
    };

    html! {
        <li class="flex gap-3">
            <img src={comment.author_avatar.clone()} alt={comment.author.clone()} class="w-8 h-8 rounded-full" />
            <div>
                <p class="text-sm">
                    <span class="font-semibold">{ &comment.author }</span>
                    { if comment.is_verified { html! { <span class="ml-1 text-blue-600">{"✓"}</span> } } else { html! {} } }
                    { if comment.zk_proof_verified { html! { <span class="ml-1 text-xs text-green-700">{"zk"}</span> } } else { html! {} } }
                    <span class="ml-2 text-xs text-gray-500">{ &comment.timestamp }</span>
                </p>
                <p>{ &comment.content }</p>
                <div class="text-xs flex gap-3">
                    <button {onclick} class="hover:underline">{ format!("👍 {}", comment.likes) }</button>
                    <span>{ format!("👎 {}", comment.dislikes) }</span>
                </div>
            </div>
        </li>
    }
}
