use std::collections::HashSet;

use proptest::prelude::*;
use question_sequencer::models::AnchorRef;
use question_sequencer::{sequence, ContentKind, Instruction, Page, Passage, Question};

const PASSAGE_POOL: [&str; 5] = ["Passage I", "Passage II", "Passage III", "Passage IV", "Passage XV"];
const INSTRUCTION_POOL: [&str; 5] = [
    "Instruction 1",
    "Instruction 2",
    "Instruction 3",
    "Instruction 4",
    "Instruction 5",
];

#[derive(Debug, Clone)]
struct Bank {
    questions: Vec<Question>,
    passages: Vec<Passage>,
    instructions: Vec<Instruction>,
}

fn bank_strategy() -> impl Strategy<Value = Bank> {
    let anchor = prop_oneof![
        Just(None),
        (any::<bool>(), 0..PASSAGE_POOL.len()).prop_map(Some),
    ];
    (
        prop::collection::vec(anchor, 0..40),
        prop::collection::vec(any::<bool>(), PASSAGE_POOL.len()),
        prop::collection::vec(any::<bool>(), INSTRUCTION_POOL.len()),
    )
        .prop_map(|(anchors, passage_mask, instruction_mask)| {
            let questions = anchors
                .into_iter()
                .enumerate()
                .map(|(i, anchor)| {
                    let question = Question::new(format!("q{}", i)).with_id(i as u64);
                    match anchor {
                        Some((true, k)) => question.with_passage(PASSAGE_POOL[k]),
                        Some((false, k)) => question.with_instruction(INSTRUCTION_POOL[k]),
                        None => question,
                    }
                })
                .collect();
            // 集合按逆序给出，排序由被测函数负责
            let passages = PASSAGE_POOL
                .iter()
                .zip(&passage_mask)
                .rev()
                .filter(|(_, keep)| **keep)
                .map(|(id, _)| Passage::new(*id, format!("text of {}", id)))
                .collect();
            let instructions = INSTRUCTION_POOL
                .iter()
                .zip(&instruction_mask)
                .rev()
                .filter(|(_, keep)| **keep)
                .map(|(id, _)| Instruction::new(*id, format!("text of {}", id)))
                .collect();
            Bank {
                questions,
                passages,
                instructions,
            }
        })
}

fn input_index(page: &Page) -> Option<usize> {
    page.as_question()
        .and_then(|q| q.body.strip_prefix('q'))
        .and_then(|n| n.parse().ok())
}

proptest! {
    #[test]
    fn count_matches_surviving_questions_plus_used_anchors(bank in bank_strategy()) {
        let pages = sequence(&bank.questions, &bank.passages, &bank.instructions).unwrap();

        let passage_ids: HashSet<&str> = bank.passages.iter().map(|p| p.id.as_str()).collect();
        let instruction_ids: HashSet<&str> = bank.instructions.iter().map(|i| i.id.as_str()).collect();

        let mut used_anchors = HashSet::new();
        let mut surviving = 0;
        for question in &bank.questions {
            match question.anchor() {
                Some(AnchorRef::Passage(id)) if passage_ids.contains(id) => {
                    used_anchors.insert(("p", id));
                    surviving += 1;
                }
                Some(AnchorRef::Instruction(id)) if instruction_ids.contains(id) => {
                    used_anchors.insert(("i", id));
                    surviving += 1;
                }
                Some(_) => {}
                None => surviving += 1,
            }
        }

        prop_assert_eq!(pages.len(), used_anchors.len() + surviving);
    }

    #[test]
    fn ids_are_dense_from_one(bank in bank_strategy()) {
        let pages = sequence(&bank.questions, &bank.passages, &bank.instructions).unwrap();
        let ids: Vec<usize> = pages.iter().map(Page::id).collect();
        let expected: Vec<usize> = (1..=pages.len()).collect();
        prop_assert_eq!(ids, expected);
    }

    #[test]
    fn questions_keep_input_order_within_anchor(bank in bank_strategy()) {
        let pages = sequence(&bank.questions, &bank.passages, &bank.instructions).unwrap();

        let mut last_seen = std::collections::HashMap::new();
        for page in &pages {
            let Some(index) = input_index(page) else { continue };
            let key = match bank.questions[index].anchor() {
                Some(AnchorRef::Passage(id)) => format!("p:{}", id),
                Some(AnchorRef::Instruction(id)) => format!("i:{}", id),
                None => "standalone".to_string(),
            };
            if let Some(previous) = last_seen.insert(key, index) {
                prop_assert!(previous < index);
            }
        }
    }

    #[test]
    fn every_question_follows_its_anchor(bank in bank_strategy()) {
        let pages = sequence(&bank.questions, &bank.passages, &bank.instructions).unwrap();

        let mut current: Option<(ContentKind, String)> = None;
        let mut seen_standalone = false;
        let mut seen_anchors = HashSet::new();

        for page in &pages {
            match page {
                Page::Content(content) => {
                    prop_assert!(!seen_standalone, "content page after standalone block");
                    prop_assert!(seen_anchors.insert((content.kind, content.title.clone())));
                    current = Some((content.kind, content.title.clone()));
                }
                Page::Question(question_page) => match question_page.question.anchor() {
                    Some(AnchorRef::Passage(id)) => {
                        prop_assert_eq!(current.clone(), Some((ContentKind::Passage, id.to_string())));
                    }
                    Some(AnchorRef::Instruction(id)) => {
                        prop_assert_eq!(current.clone(), Some((ContentKind::Instruction, id.to_string())));
                    }
                    None => seen_standalone = true,
                },
            }
        }
    }

    #[test]
    fn content_pages_only_for_anchors_with_questions(bank in bank_strategy()) {
        let pages = sequence(&bank.questions, &bank.passages, &bank.instructions).unwrap();

        for (i, page) in pages.iter().enumerate() {
            if page.is_content() {
                let next = pages.get(i + 1);
                prop_assert!(next.is_some_and(|p| !p.is_content()));
            }
        }
    }
}
