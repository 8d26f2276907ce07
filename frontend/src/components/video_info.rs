use crate::components::donation_modal::DonationModal;
use crate::models::Video;
use crate::state::engagement::Engagement;
use crate::utils::shorten_hash;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VideoInfoProps {
    pub video: Video,
}

#[function_component(VideoInfo)]
pub fn video_info(props: &VideoInfoProps) -> Html {
    let video = &props.video;
    let engagement = use_state(Engagement::default);
    let donating = use_state(|| false);

    let toggle = |apply: fn(&mut Engagement)| {
        let engagement = engagement.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *engagement;
            apply(&mut next);
            engagement.set(next);
        })
    };

    let open_donation = {
        let donating = donating.clone();
        Callback::from(move |_: MouseEvent| donating.set(true))
    };

    let close_donation = {
        let donating = donating.clone();
        Callback::from(move |_: ()| donating.set(false))
    };

    html! {
        <div class="mt-4">
            <h1 class="text-xl font-bold">{ &video.title }</h1>
            <div class="flex items-center justify-between mt-2">
                <div class="flex items-center gap-3">
                    <img src={video.creator_avatar.clone()} alt={video.creator.clone()} class="w-10 h-10 rounded-full" />
                    <div>
                        <p class="font-semibold">{ &video.creator }</p>
                        <p class="text-xs font-mono">{ shorten_hash(&video.creator_address, 6) }</p>
                    </div>
                    <button
                        class={classes!("px-3", "py-1", "rounded", if engagement.subscribed { "bg-gray-300" } else { "bg-red-600 text-white" })}
                        onclick={toggle(Engagement::toggle_subscribe)}
                    >
                        { if engagement.subscribed { "Subscribed" } else { "Subscribe" } }
                    </button>
                </div>
                <div class="flex items-center gap-2">
                    <button
                        class={classes!("px-3", "py-1", "border", "rounded", engagement.liked.then_some("bg-blue-100"))}
                        onclick={toggle(Engagement::toggle_like)}
                    >
                        { format!("👍 {}", video.likes) }
                    </button>
                    <button
                        class={classes!("px-3", "py-1", "border", "rounded", engagement.disliked.then_some("bg-blue-100"))}
                        onclick={toggle(Engagement::toggle_dislike)}
                    >
                        {"👎"}
                    </button>
                    <button class="px-3 py-1 bg-green-600 text-white rounded" onclick={open_donation}>
                        {"Donate"}
                    </button>
                </div>
            </div>

            <div class="mt-4 p-3 bg-gray-100 rounded text-sm">
                <p class="font-semibold">
                    { format!("{} views · {} · earned {}", video.views, video.upload_time, video.earnings) }
                </p>
                <p class="mt-2 whitespace-pre-line">{ &video.description }</p>
                <p class="mt-2">
                    { for video.tags.iter().map(|tag| html! { <span class="mr-2 text-blue-600">{ format!("#{}", tag) }</span> }) }
                </p>
                <p class="mt-2 text-xs font-mono">
                    { format!("NFT #{} · IPFS {}", video.nft_token_id, shorten_hash(&video.ipfs_hash, 8)) }
                </p>
            </div>

            {
                if *donating {
                    html! {
                        <DonationModal
                            creator={video.creator.clone()}
                            creator_address={video.creator_address.clone()}
                            on_close={close_donation}
                        />
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
