//! # skillx-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

#[cfg(test)]
mod testing;

pub use dto::{
    AccessTokenResponse, ConnectionActionRequest, ConnectionResponse, ConversationResponse,
    DeleteAccountRequest, DeleteConversationResponse, HealthResponse, LoginRequest,
    MarkReadResponse, MessageOnlyResponse, MessageResponse, ReadinessResponse, RefreshRequest,
    RegisterRequest, SearchQuery, SendConnectionRequest, SendMessageRequest, TokenPairResponse,
    UpdateProfileRequest, UserResponse,
};
pub use services::{
    AuthService, ConnectionService, ConversationService, MessageService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, UserService,
};
