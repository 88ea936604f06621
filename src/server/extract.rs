use axum::extract::{FromRequest, FromRequestParts};

use crate::error::TriviaError;

/// `axum::Json` answering rejections with the error envelope.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(TriviaError))]
pub struct JsonBody<T>(pub T);

/// `axum::extract::Path` answering rejections with the error envelope.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(TriviaError))]
pub struct PathParam<T>(pub T);

/// `axum::extract::Query` answering rejections with the error envelope.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(TriviaError))]
pub struct QueryParams<T>(pub T);
