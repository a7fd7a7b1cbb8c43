//! OpenAPI Documentation

use utoipa::OpenApi;

use crate::models::{
    BaziResponse, CalculateBaziRequest, ErrorResponse, GenerateHexagramRequest, HexagramResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::bazi::calculate_bazi,
        super::hexagram::generate_hexagram,
    ),
    info(
        title = "Tianji API",
        version = "0.1.0",
        description = "天机 - Four Pillars (八字) charts and six-line (六爻) coin readings",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Bazi", description = "Bazi (八字) - Lunar date and Four Pillars"),
        (name = "Hexagram", description = "Hexagram (六爻) - Coin-toss divination"),
    ),
    components(
        schemas(
            CalculateBaziRequest,
            BaziResponse,
            GenerateHexagramRequest,
            HexagramResponse,
            ErrorResponse,
        )
    )
)]
pub struct ApiDoc;
