use crate::state::playback::ViewTracker;
use crate::utils::format_time;
use web_sys::HtmlVideoElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VideoPlayerProps {
    pub src: String,
    pub poster: String,
    /// Emitted once, when half the video has been played.
    pub on_half_watched: Callback<()>,
}

#[function_component(VideoPlayer)]
pub fn video_player(props: &VideoPlayerProps) -> Html {
    let video_ref = use_node_ref();
    let tracker = use_mut_ref(ViewTracker::default);
    let current_time = use_state(|| 0.0_f64);
    let duration = use_state(|| 0.0_f64);

    let on_time_update = {
        let video_ref = video_ref.clone();
        let tracker = tracker.clone();
        let current_time = current_time.clone();
        let duration = duration.clone();
        let on_half_watched = props.on_half_watched.clone();

        Callback::from(move |_: Event| {
            let Some(video) = video_ref.cast::<HtmlVideoElement>() else {
                return;
            };
            let now = video.current_time();
            let total = video.duration();
            current_time.set(now);
            if total.is_finite() {
                duration.set(total);
            }
            if tracker.borrow_mut().observe(now, total) {
                on_half_watched.emit(());
            }
        })
    };

    let counted = tracker.borrow().is_tracked();

    html! {
        <div class="bg-black rounded overflow-hidden">
            <video
                ref={video_ref}
                src={props.src.clone()}
                poster={props.poster.clone()}
                controls=true
                class="w-full"
                ontimeupdate={on_time_update}
            />
            <div class="flex justify-between text-xs text-white p-1">
                <span>{ format!("{} / {}", format_time(*current_time), format_time(*duration)) }</span>
                { if counted { html! { <span>{"View counted"}</span> } } else { html! {} } }
            </div>
        </div>
    }
}
