use crate::models::game::GamePhase;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("役職の合計人数({actual})がプレイヤー数({expected})と一致しません")]
    RoleCountMismatch { expected: usize, actual: usize },
    #[error("プレイヤーは{min}人以上必要です(現在{actual}人)")]
    TooFewPlayers { min: usize, actual: usize },
    #[error("プレイヤー名が空です")]
    EmptyPlayerName,
    #[error("プレイヤー名が重複しています: {0}")]
    DuplicatePlayerName(String),
    #[error("対象プレイヤー '{0}' が見つかりません")]
    UnresolvedTarget(String),
    #[error("現在のフェーズは{actual}です({expected}である必要があります)")]
    InvalidPhase {
        expected: GamePhase,
        actual: GamePhase,
    },
}
