use crate::models::{ErrorResponse, IpfsUploadResult, PinnedFile, UploadJob, UploadRequest};
use crate::services::upload_service::{self, UploadRejected};
use crate::utils::{is_image_content_type, is_video_content_type, parse_tags};
use crate::AppState;
use log::{error, info, warn};
use rocket::form::Form;
use rocket::fs::TempFile;
use rocket::http::{ContentType, Status};
use rocket::response::status::{Custom, NoContent};
use rocket::serde::json::Json;
use rocket::{delete, get, post, FromForm, State};
use tokio::io::AsyncReadExt;

#[derive(FromForm)]
pub struct FileUpload<'r> {
    pub file: TempFile<'r>,
}

fn mime_of(file: &TempFile<'_>) -> String {
    file.content_type()
        .map(|ct: &ContentType| format!("{}/{}", ct.top(), ct.sub()))
        .unwrap_or_default()
}

fn file_name_of(file: &TempFile<'_>, fallback: &str) -> String {
    let stem = file.name().unwrap_or(fallback);
    match file.content_type().and_then(|ct| ct.extension()) {
        Some(ext) => format!("{stem}.{ext}"),
        None => stem.to_string(),
    }
}

async fn read_bytes(file: &TempFile<'_>) -> std::io::Result<Vec<u8>> {
    let reader = file.open().await?;
    tokio::pin!(reader);
    let mut bytes = Vec::with_capacity(file.len() as usize);
    reader.read_to_end(&mut bytes).await?;
    Ok(bytes)
}

fn rejection(reason: UploadRejected) -> ErrorResponse {
    let (code, status) = match reason {
        UploadRejected::MissingFile => ("missing_file", Status::BadRequest),
        UploadRejected::MissingTitle => ("missing_title", Status::BadRequest),
        UploadRejected::InvalidFileType => ("invalid_file_type", Status::UnsupportedMediaType),
    };
    ErrorResponse::bad_request(code, reason.to_string()).with_status(status)
}

#[post("/file", data = "<upload>")]
pub async fn upload_file(
    state: &State<AppState>,
    upload: Form<FileUpload<'_>>,
) -> Result<Json<PinnedFile>, ErrorResponse> {
    let content_type = mime_of(&upload.file);
    if !is_video_content_type(&content_type) {
        warn!("Rejected video selection with content type {content_type:?}");
        return Err(rejection(UploadRejected::InvalidFileType));
    }

    let file_name = file_name_of(&upload.file, "video");
    let size = upload.file.len();
    let bytes = if state.ipfs.pins_remotely() {
        let bytes = read_bytes(&upload.file).await.map_err(|e| {
            error!("Failed to read uploaded file {file_name}: {e:?}");
            ErrorResponse::bad_request("read_failed", "Could not read the uploaded file")
                .with_status(Status::InternalServerError)
        })?;
        Some(bytes)
    } else {
        None
    };

    match state.ipfs.pin_file(&file_name, &content_type, size, bytes).await {
        Ok(pinned) => Ok(Json(pinned)),
        Err(e) => {
            error!("Failed to pin {file_name}: {e:?}");
            Err(
                ErrorResponse::bad_request("pin_failed", "Pinning the file failed")
                    .with_status(Status::BadGateway),
            )
        }
    }
}

#[post("/thumbnail", data = "<upload>")]
pub async fn upload_thumbnail(
    state: &State<AppState>,
    upload: Form<FileUpload<'_>>,
) -> Result<Json<IpfsUploadResult>, ErrorResponse> {
    let content_type = mime_of(&upload.file);
    if !is_image_content_type(&content_type) {
        return Err(
            ErrorResponse::bad_request("invalid_file_type", "Please select a valid image file")
                .with_status(Status::UnsupportedMediaType),
        );
    }
    let file_name = file_name_of(&upload.file, "thumbnail");
    Ok(Json(
        state
            .ipfs
            .upload_thumbnail(&file_name, upload.file.len())
            .await,
    ))
}

#[post("/", data = "<request>")]
pub async fn start_upload(
    state: &State<AppState>,
    request: Json<UploadRequest>,
) -> Result<Custom<Json<UploadJob>>, ErrorResponse> {
    upload_service::validate_request(&request).map_err(rejection)?;
    let cid = match &request.file {
        Some(file) => file.cid.clone(),
        None => return Err(rejection(UploadRejected::MissingFile)),
    };

    let job = state.uploads.create(&request).ok_or_else(|| {
        error!("Upload registry is unavailable");
        ErrorResponse::bad_request("registry_unavailable", "Upload failed. Please try again.")
            .with_status(Status::InternalServerError)
    })?;

    info!(
        "Publishing {:?} as job {} (category {:?}, tags {:?}, monetized {}, NFT price {})",
        job.title,
        job.id,
        request.category,
        parse_tags(&request.tags),
        request.monetization,
        request.nft_price
    );

    tokio::spawn(upload_service::run_pipeline(
        state.uploads.clone(),
        state.latency,
        job.id.clone(),
        cid,
    ));

    Ok(Custom(Status::Accepted, Json(job)))
}

#[get("/<job_id>")]
pub async fn get_upload(state: &State<AppState>, job_id: &str) -> Option<Json<UploadJob>> {
    state.uploads.get(job_id).map(Json)
}

#[delete("/<job_id>")]
pub async fn forget_upload(state: &State<AppState>, job_id: &str) -> Result<NoContent, Status> {
    if state.uploads.forget(job_id) {
        info!("Forgot upload job {job_id}");
        Ok(NoContent)
    } else {
        Err(Status::NotFound)
    }
}
