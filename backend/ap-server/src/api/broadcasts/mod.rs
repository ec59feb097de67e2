pub mod broadcast_dto;
pub mod broadcast_list_response;
pub mod broadcast_response;
pub mod broadcast_send_response;
pub mod broadcasts;
pub mod create_broadcast_request;
pub mod list_broadcasts_query;
