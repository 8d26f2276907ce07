use crate::models::{Comment, ErrorResponse, NewComment, Video, VideoSummary};
use crate::services::video_service;
use crate::AppState;
use log::info;
use rocket::http::Status;
use rocket::response::status::{Custom, NoContent};
use rocket::serde::json::Json;
use rocket::{get, post, Responder, State};

#[derive(Responder)]
pub enum CommentOutcome {
    Posted(Custom<Json<Comment>>),
    Ignored(NoContent),
    Missing(ErrorResponse),
}

fn unknown_video(id: u32) -> ErrorResponse {
    ErrorResponse::bad_request("video_not_found", format!("Video {id} is not in the catalog"))
        .with_status(Status::NotFound)
}

#[get("/")]
pub async fn list_videos() -> Json<Vec<VideoSummary>> {
    let videos = video_service::list_videos();
    info!("Serving {} grid videos.", videos.len());
    Json(videos)
}

#[get("/<id>")]
pub async fn get_video(id: &str) -> Json<Video> {
    Json(video_service::find_video(id))
}

#[get("/<id>/recommendations")]
pub async fn get_recommendations(id: &str) -> Json<Vec<VideoSummary>> {
    let current = video_service::find_video(id);
    Json(video_service::recommendations(current.id))
}

#[get("/<id>/comments")]
pub async fn list_comments(
    state: &State<AppState>,
    id: u32,
) -> Result<Json<Vec<Comment>>, ErrorResponse> {
    state
        .comments
        .list(id)
        .await
        .map(Json)
        .ok_or_else(|| unknown_video(id))
}

#[post("/<id>/comments", data = "<comment>")]
pub async fn post_comment(
    state: &State<AppState>,
    id: u32,
    comment: Json<NewComment>,
) -> CommentOutcome {
    if !video_service::is_listed(id) {
        return CommentOutcome::Missing(unknown_video(id));
    }
    match state.comments.submit(id, &comment.content).await {
        Some(posted) => CommentOutcome::Posted(Custom(Status::Created, Json(posted))),
        None => {
            info!("Ignoring blank comment on video {id}");
            CommentOutcome::Ignored(NoContent)
        }
    }
}

#[post("/<id>/comments/<comment_id>/like")]
pub async fn like_comment(
    state: &State<AppState>,
    id: u32,
    comment_id: u32,
) -> Result<Json<Comment>, ErrorResponse> {
    if !video_service::is_listed(id) {
        return Err(unknown_video(id));
    }
    state.comments.like(id, comment_id).await.map(Json).ok_or_else(|| {
        ErrorResponse::bad_request(
            "comment_not_found",
            format!("Comment {comment_id} does not exist on video {id}"),
        )
        .with_status(Status::NotFound)
    })
}
