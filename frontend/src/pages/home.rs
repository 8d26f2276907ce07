use crate::api::fetch_videos;
use crate::components::video_card::VideoCard;
use crate::models::VideoSummary;
use yew::prelude::*;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let videos = use_state(Vec::<VideoSummary>::new);
    let loading = use_state(|| true);
    let error_message = use_state(|| None::<String>);

    {
        let videos = videos.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_videos().await {
                    Ok(list) => videos.set(list),
                    Err(e) => error_message.set(Some(format!("Failed to load videos: {}", e))),
                }
                loading.set(false);
            });
            || ()
        });
    }

    if *loading {
        return html! { <p class="text-center">{"Loading videos..."}</p> };
    }

    html! {
        <>
            {
                if let Some(msg) = &*error_message {
                    html! { <p class="text-red-600 text-center mb-4">{ msg }</p> }
                } else {
                    html! {}
                }
            }
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                { for videos.iter().map(|video| html! {
                    <VideoCard key={video.id} video={video.clone()} />
                })}
            </div>
        </>
    }
}
