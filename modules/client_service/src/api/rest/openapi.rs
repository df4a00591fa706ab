//! OpenAPI component schemas for the client service

use super::dto::*;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(schemas(
        ClientDto,
        CreateClientRequest,
        UpdateClientRequest,
        CaseSummaryDto,
    )),
    tags((name = "clients", description = "Clients and their cases"))
)]
pub struct ClientApiDoc;
