// src/handlers/quiz.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    error::AppError,
    models::quiz::{CreateQuizRequest, assemble_quiz},
    store,
};

/// Creates a quiz together with its perguntas and alternativas.
///
/// * Validates that the payload has a title and at least one pergunta.
/// * Runs every insert inside one transaction: either the whole tree is
///   persisted or nothing is, with rollback on any failure.
/// * Returns the generated quiz id.
pub async fn create_quiz(
    State(pool): State<SqlitePool>,
    Json(payload): Json<CreateQuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    // Validated as present above.
    let titulo = payload.titulo.unwrap_or_default();
    let perguntas = payload.perguntas.unwrap_or_default();

    let mut tx = pool.begin().await?;

    let quiz_id = store::insert_quiz(&mut *tx, &titulo, payload.descricao.as_deref())
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert quiz: {:?}", e);
            AppError::InternalServerError(e.to_string())
        })?;

    for pergunta in &perguntas {
        let pergunta_id = store::insert_pergunta(&mut *tx, quiz_id, &pergunta.enunciado).await?;

        for alternativa in &pergunta.alternativas {
            store::insert_alternativa(&mut *tx, pergunta_id, &alternativa.texto, alternativa.correta)
                .await?;
        }
    }

    tx.commit().await.map_err(|e| {
        tracing::error!("Failed to commit quiz {}: {:?}", quiz_id, e);
        AppError::InternalServerError(e.to_string())
    })?;

    Ok(Json(serde_json::json!({
        "message": "Quiz criado com sucesso!",
        "quizId": quiz_id
    })))
}

/// Lists all quizzes, newest first.
pub async fn list_quizzes(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let quizzes = store::list_quizzes(&pool).await.map_err(|e| {
        tracing::error!("Failed to list quizzes: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    Ok(Json(quizzes))
}

/// Retrieves a single quiz by id, fully expanded.
pub async fn get_quiz(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let rows = store::quiz_rows(&pool, id).await.map_err(|e| {
        tracing::error!("Failed to fetch quiz {}: {:?}", id, e);
        AppError::InternalServerError(e.to_string())
    })?;

    let quiz =
        assemble_quiz(rows).ok_or(AppError::NotFound("Quiz não encontrado".to_string()))?;

    Ok(Json(quiz))
}
