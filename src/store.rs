// src/store.rs

use sqlx::{SqliteExecutor, SqlitePool};

use crate::models::quiz::{QuizRow, QuizSummary};

/// Ensures the three tables exist with cascade-delete foreign keys.
///
/// Safe to call on every process start regardless of prior state
/// (`CREATE TABLE IF NOT EXISTS`). Foreign key enforcement itself is a
/// per-connection pragma and is enabled in the pool's connect options.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS quiz (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            titulo TEXT NOT NULL,
            descricao TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS pergunta (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            quiz_id INTEGER NOT NULL,
            enunciado TEXT NOT NULL,
            FOREIGN KEY (quiz_id) REFERENCES quiz(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS alternativa (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            pergunta_id INTEGER NOT NULL,
            texto TEXT NOT NULL,
            correta BOOLEAN NOT NULL DEFAULT 0,
            FOREIGN KEY (pergunta_id) REFERENCES pergunta(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Inserts a quiz row and returns its generated id.
///
/// Takes any SQLite executor so callers can run it inside a transaction.
pub async fn insert_quiz<'e>(
    executor: impl SqliteExecutor<'e>,
    titulo: &str,
    descricao: Option<&str>,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query("INSERT INTO quiz (titulo, descricao) VALUES (?1, ?2)")
        .bind(titulo)
        .bind(descricao)
        .execute(executor)
        .await?;

    Ok(result.last_insert_rowid())
}

/// Inserts a question row under the given quiz and returns its generated id.
pub async fn insert_pergunta<'e>(
    executor: impl SqliteExecutor<'e>,
    quiz_id: i64,
    enunciado: &str,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query("INSERT INTO pergunta (quiz_id, enunciado) VALUES (?1, ?2)")
        .bind(quiz_id)
        .bind(enunciado)
        .execute(executor)
        .await?;

    Ok(result.last_insert_rowid())
}

/// Inserts an option row under the given question and returns its generated id.
/// `correta` is stored as a strict 0/1 integer.
pub async fn insert_alternativa<'e>(
    executor: impl SqliteExecutor<'e>,
    pergunta_id: i64,
    texto: &str,
    correta: bool,
) -> Result<i64, sqlx::Error> {
    let result =
        sqlx::query("INSERT INTO alternativa (pergunta_id, texto, correta) VALUES (?1, ?2, ?3)")
            .bind(pergunta_id)
            .bind(texto)
            .bind(correta)
            .execute(executor)
            .await?;

    Ok(result.last_insert_rowid())
}

/// Lists all quizzes, most recently created first.
pub async fn list_quizzes(pool: &SqlitePool) -> Result<Vec<QuizSummary>, sqlx::Error> {
    sqlx::query_as::<_, QuizSummary>("SELECT id, titulo, descricao FROM quiz ORDER BY id DESC")
        .fetch_all(pool)
        .await
}

/// Fetches the flat joined rows for one quiz: one row per alternativa,
/// repeating the quiz and pergunta columns.
///
/// Inner joins throughout, so a quiz (or pergunta) without children produces
/// no rows even though it exists in storage. An empty result is not an error.
pub async fn quiz_rows(pool: &SqlitePool, quiz_id: i64) -> Result<Vec<QuizRow>, sqlx::Error> {
    sqlx::query_as::<_, QuizRow>(
        r#"
        SELECT q.id as quiz_id, q.titulo, q.descricao,
               p.id as pergunta_id, p.enunciado,
               a.id as alternativa_id, a.texto, a.correta
        FROM quiz q
        JOIN pergunta p ON q.id = p.quiz_id
        JOIN alternativa a ON p.id = a.pergunta_id
        WHERE q.id = ?1
        "#,
    )
    .bind(quiz_id)
    .fetch_all(pool)
    .await
}
