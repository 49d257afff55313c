use serde::Serialize;
use std::collections::BTreeMap;

/// A labelled reply variant; the bot picks one value per `answer_type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerAlternative {
    pub id: i64,
    pub chat: i64,
    #[serde(rename = "type")]
    pub answer_type: String,
    pub value: String,
}

/// Group values by type, keeping the input order inside each group.
///
/// Type keys come out sorted, not in first-appearance order, so the grouping
/// of a chat serializes identically no matter which type was added first.
pub fn group_by_type(alternatives: &[AnswerAlternative]) -> BTreeMap<String, Vec<String>> {
    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for aa in alternatives {
        grouped
            .entry(aa.answer_type.clone())
            .or_default()
            .push(aa.value.clone());
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aa(id: i64, t: &str, v: &str) -> AnswerAlternative {
        AnswerAlternative {
            id,
            chat: 1,
            answer_type: t.to_string(),
            value: v.to_string(),
        }
    }

    #[test]
    fn groups_preserve_insertion_order() {
        let grouped = group_by_type(&[
            aa(1, "food", "pizza"),
            aa(2, "joke", "x"),
            aa(3, "food", "salad"),
        ]);

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped["food"], vec!["pizza", "salad"]);
        assert_eq!(grouped["joke"], vec!["x"]);
    }

    #[test]
    fn type_keys_are_sorted() {
        let grouped = group_by_type(&[
            aa(1, "workout", "go"),
            aa(2, "food", "pizza"),
            aa(3, "joke", "x"),
        ]);

        let keys: Vec<&str> = grouped.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["food", "joke", "workout"]);
    }

    #[test]
    fn empty_input_gives_empty_map() {
        assert!(group_by_type(&[]).is_empty());
    }
}
