//! Path and Query Parameter Routes
//!
//! Small endpoints showing path segments, typed path parameters, required
//! query parameters and the combination of both.

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query,
    },
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::errors::ApiResult;

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct GreetingResponse {
    pub user: String,
}

#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub id: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserQuery {
    #[serde(rename(serialize = "user"))]
    pub username: String,
    pub age: i64,
}

#[derive(Debug, Deserialize)]
pub struct DepartmentQuery {
    pub department: String,
}

#[derive(Debug, Serialize)]
pub struct EmployeeResponse {
    #[serde(rename = "Employee")]
    pub employee: String,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Department")]
    pub department: String,
}

// ==================
// Routes
// ==================

/// Create path/query demo routes
pub fn basics_routes() -> Router {
    Router::new()
        .route("/", get(welcome_handler))
        .route("/hello/:first_name/:last_name", get(hello_handler))
        .route("/order/:order_id", get(order_handler))
        .route("/user", get(user_handler))
        .route("/employee/:name/company/:company", get(employee_handler))
}

async fn welcome_handler() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Hello, msgboard".to_string(),
    })
}

async fn hello_handler(
    names: Result<Path<(String, String)>, PathRejection>,
) -> ApiResult<Json<GreetingResponse>> {
    let Path((first_name, last_name)) = names?;
    Ok(Json(GreetingResponse {
        user: format!("Hello {} {}", first_name, last_name),
    }))
}

async fn order_handler(
    order_id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<OrderResponse>> {
    let Path(id) = order_id?;
    Ok(Json(OrderResponse { id }))
}

async fn user_handler(
    query: Result<Query<UserQuery>, QueryRejection>,
) -> ApiResult<Json<UserQuery>> {
    let Query(user) = query?;
    Ok(Json(user))
}

async fn employee_handler(
    path: Result<Path<(String, String)>, PathRejection>,
    query: Result<Query<DepartmentQuery>, QueryRejection>,
) -> ApiResult<Json<EmployeeResponse>> {
    let Path((employee, company)) = path?;
    let Query(DepartmentQuery { department }) = query?;
    Ok(Json(EmployeeResponse {
        employee,
        company,
        department,
    }))
}
