// src/models/quiz.rs

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

/// Summary row from the 'quiz' table, as returned by the list endpoint.
/// Field names are exposed verbatim in JSON for client compatibility.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct QuizSummary {
    pub id: i64,
    pub titulo: String,
    pub descricao: Option<String>,
}

/// One row of the three-table join: quiz and pergunta columns repeat,
/// one row per alternativa.
#[derive(Debug, Clone, FromRow)]
pub struct QuizRow {
    pub quiz_id: i64,
    pub titulo: String,
    pub descricao: Option<String>,
    pub pergunta_id: i64,
    pub enunciado: String,
    pub alternativa_id: i64,
    pub texto: String,
    pub correta: bool,
}

/// Fully expanded quiz document returned by the get-by-id endpoint.
#[derive(Debug, Serialize)]
pub struct QuizDocument {
    pub id: i64,
    pub titulo: String,
    pub descricao: Option<String>,
    pub perguntas: Vec<PerguntaDocument>,
}

#[derive(Debug, Serialize)]
pub struct PerguntaDocument {
    pub id: i64,
    pub enunciado: String,
    pub alternativas: Vec<AlternativaDocument>,
}

#[derive(Debug, Serialize)]
pub struct AlternativaDocument {
    pub id: i64,
    pub texto: String,
    pub correta: bool,
}

/// DTO for creating a quiz with its nested perguntas and alternativas.
///
/// `titulo` and `perguntas` are `Option` so that an absent field reaches the
/// validator (and maps to 400) instead of failing deserialization.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuizRequest {
    #[validate(
        required(message = "Quiz deve ter título"),
        length(min = 1, message = "Quiz deve ter título")
    )]
    pub titulo: Option<String>,
    pub descricao: Option<String>,
    #[validate(
        required(message = "Quiz deve ter pelo menos uma pergunta"),
        length(min = 1, message = "Quiz deve ter pelo menos uma pergunta")
    )]
    pub perguntas: Option<Vec<PerguntaInput>>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct PerguntaInput {
    pub enunciado: String,
    pub alternativas: Vec<AlternativaInput>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct AlternativaInput {
    pub texto: String,
    /// Defaults to false when the client omits it.
    #[serde(default)]
    pub correta: bool,
}

/// Rebuilds the nested quiz document from the flat joined rows.
///
/// Returns `None` for an empty row set (quiz not found, or invisible because
/// of the inner join). Perguntas keep the order in which their id is first
/// seen in the row sequence; alternativas keep row order.
pub fn assemble_quiz(rows: Vec<QuizRow>) -> Option<QuizDocument> {
    let first = rows.first()?.clone();

    let mut quiz = QuizDocument {
        id: first.quiz_id,
        titulo: first.titulo,
        descricao: first.descricao,
        perguntas: Vec::new(),
    };

    let mut seen: HashMap<i64, usize> = HashMap::new();
    for row in rows {
        let idx = match seen.get(&row.pergunta_id) {
            Some(&idx) => idx,
            None => {
                quiz.perguntas.push(PerguntaDocument {
                    id: row.pergunta_id,
                    enunciado: row.enunciado.clone(),
                    alternativas: Vec::new(),
                });
                let idx = quiz.perguntas.len() - 1;
                seen.insert(row.pergunta_id, idx);
                idx
            }
        };

        quiz.perguntas[idx].alternativas.push(AlternativaDocument {
            id: row.alternativa_id,
            texto: row.texto,
            correta: row.correta,
        });
    }

    Some(quiz)
}
