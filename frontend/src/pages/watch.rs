use crate::api::{fetch_recommendations, fetch_video, track_view};
use crate::components::comment_section::CommentSection;
use crate::components::video_card::Recommendations;
use crate::components::video_info::VideoInfo;
use crate::components::video_player::VideoPlayer;
use crate::env_variable_utils::CONNECTED_WALLET;
use crate::models::{Video, VideoSummary, ViewPayoutRequest};
use web_sys::console;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WatchPageProps {
    pub id: u32,
}

#[function_component(WatchPage)]
pub fn watch_page(props: &WatchPageProps) -> Html {
    let video = use_state(|| None::<Video>);
    let recommendations = use_state(Vec::<VideoSummary>::new);
    let error_message = use_state(|| None::<String>);

    {
        let video = video.clone();
        let recommendations = recommendations.clone();
        let error_message = error_message.clone();

        use_effect_with(props.id, move |id| {
            let id = *id;
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_video(id).await {
                    Ok(found) => video.set(Some(found)),
                    Err(e) => error_message.set(Some(format!("Failed to load video: {}", e))),
                }
                match fetch_recommendations(id).await {
                    Ok(list) => recommendations.set(list),
                    Err(e) => console::warn_1(&format!("Recommendations unavailable: {}", e).into()),
                }
            });
            || ()
        });
    }

    let Some(current) = (*video).clone() else {
        return match &*error_message {
            Some(msg) => html! { <p class="text-red-600 text-center">{ msg }</p> },
            None => html! { <p class="text-center">{"Loading video..."}</p> },
        };
    };

    // Pay the creator once the viewer has seen half of the video.
    let on_half_watched = {
        let request = ViewPayoutRequest {
            video_id: current.id,
            creator_address: current.creator_address.clone(),
            viewer_address: CONNECTED_WALLET.to_string(),
        };
        Callback::from(move |_: ()| {
            let request = request.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match track_view(&request).await {
                    Ok(tx) => console::log_1(
                        &format!("View payout {} of {} confirmed", tx.id, tx.amount).into(),
                    ),
                    Err(e) => console::error_1(&format!("View payout failed: {}", e).into()),
                }
            });
        })
    };

    html! {
        <div class="flex flex-col lg:flex-row gap-6">
            <div class="flex-1">
                <VideoPlayer
                    src={current.video_url.clone()}
                    poster={current.thumbnail.clone()}
                    {on_half_watched}
                />
                <VideoInfo video={current.clone()} />
                <CommentSection video_id={current.id} />
            </div>
            <div class="lg:w-80">
                <Recommendations videos={(*recommendations).clone()} />
            </div>
        </div>
    }
}
