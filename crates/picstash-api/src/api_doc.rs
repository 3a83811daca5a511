//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers::image_detail::{ImageDetailData, ImageDetailResponse, ThumbnailLinks};
use crate::handlers::stats::{StatsImages, StatsRates, StatsResponse};
use picstash_core::models::{ImageMetadata, UploadListItem, UploadReceipt, UploadStatus};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::image_upload::upload_image,
        crate::handlers::image_list::list_images,
        crate::handlers::image_detail::get_image_details,
        crate::handlers::thumbnails::get_thumbnail,
        crate::handlers::stats::get_stats,
        crate::handlers::health::health,
    ),
    components(schemas(
        ErrorResponse,
        UploadReceipt,
        UploadListItem,
        UploadStatus,
        ImageMetadata,
        ImageDetailResponse,
        ImageDetailData,
        ThumbnailLinks,
        StatsResponse,
        StatsImages,
        StatsRates,
    )),
    tags(
        (name = "images", description = "Image ingestion and derived artifacts"),
        (name = "stats", description = "Aggregate processing statistics"),
        (name = "health", description = "Service liveness")
    )
)]
pub struct ApiDoc;
