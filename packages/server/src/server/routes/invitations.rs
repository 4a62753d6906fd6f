//! `/invitations` routes

use axum::{extract::Extension, http::StatusCode, Json};

use crate::common::InvitationId;
use crate::domains::invitations::activities as invitations;
use crate::domains::invitations::{
    Invitation, InvitationDetails, RespondToInvitationInput, SendInvitationInput,
};
use crate::server::app::AppState;
use crate::server::error::{ApiJson, ApiPath, ApiResult};
use crate::server::middleware::AuthUser;
use crate::server::response::ApiResponse;

pub async fn send_invitation_handler(
    Extension(state): Extension<AppState>,
    user: AuthUser,
    ApiJson(input): ApiJson<SendInvitationInput>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Invitation>>)> {
    let invitation = invitations::send_invitation(&user.actor(), input, &state.deps).await?;
    Ok((
        StatusCode::CREATED,
        ApiResponse::with_message("invitation sent successfully", invitation),
    ))
}

pub async fn my_invitations_handler(
    Extension(state): Extension<AppState>,
    user: AuthUser,
) -> ApiResult<Json<ApiResponse<Vec<InvitationDetails>>>> {
    let details = invitations::list_my_invitations(&user.actor(), &state.deps).await?;
    Ok(ApiResponse::data(details))
}

pub async fn respond_to_invitation_handler(
    Extension(state): Extension<AppState>,
    user: AuthUser,
    ApiPath(invitation_id): ApiPath<InvitationId>,
    ApiJson(input): ApiJson<RespondToInvitationInput>,
) -> ApiResult<Json<ApiResponse<Invitation>>> {
    let invitation =
        invitations::respond_to_invitation(&user.actor(), invitation_id, input, &state.deps)
            .await?;
    let message = format!("invitation {}", invitation.status);
    Ok(ApiResponse::with_message(message, invitation))
}
