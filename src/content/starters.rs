//! Suggested questions offered before a conversation starts.

use serde::Serialize;

/// A pre-authored example prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StarterQuestion {
    pub content: &'static str,
}

/// Starter questions, in display order.
pub static STARTER_QUESTIONS: [StarterQuestion; 4] = [
    StarterQuestion {
        content: "What are some of the recent papers published from research at the Large Hadron Collider (LHC)?",
    },
    StarterQuestion {
        content: "What is a research paper title and abstract for new research on Lie groups from arxiv.org?",
    },
    StarterQuestion {
        content: "Can you provide a summary of new research on the discrete dipole approximation?",
    },
    StarterQuestion {
        content: "What are some new insights in the search for neutrinoless double beta decay?",
    },
];
