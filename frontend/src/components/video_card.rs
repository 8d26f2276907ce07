use crate::models::VideoSummary;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub video: VideoSummary,
    #[prop_or_default]
    pub compact: bool,
}

#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    let video = &props.video;
    let layout = if props.compact { "flex gap-2" } else { "block" };

    html! {
        <Link<Route> to={Route::Watch { id: video.id }} classes={classes!("hover:opacity-90", layout)}>
            <div class="relative">
                <img src={video.thumbnail.clone()} alt={video.title.clone()} class="rounded" />
                <span class="absolute bottom-1 right-1 text-xs bg-black text-white px-1">
                    { &video.duration }
                </span>
            </div>
            <div>
                <h3 class="font-semibold">{ &video.title }</h3>
                <p class="text-sm">{ &video.creator }</p>
                <p class="text-xs">
                    { format!("{} views · {} · {}", video.views, video.upload_time, video.earnings) }
                </p>
            </div>
        </Link<Route>>
    }
}

#[derive(Properties, PartialEq)]
pub struct RecommendationsProps {
    pub videos: Vec<VideoSummary>,
}

#[function_component(Recommendations)]
pub fn recommendations(props: &RecommendationsProps) -> Html {
    html! {
        <div class="space-y-3">
            <h2 class="font-semibold">{"Up next"}</h2>
            { for props.videos.iter().map(|video| html! {
                <VideoCard key={video.id} video={video.clone()} compact=true />
            })}
        </div>
    }
}
