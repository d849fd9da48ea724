/*!
The dataset sample text format: one plain-text file per dataset, line 1 the
dataset name, line 2 the system name, each subsequent line an observation
set (optionally annotated with a ground-truth topic literal and labels).

Grounded on `dataset_item.py` / `annotated_dataset_item.py`'s `__str__` /
`from_str`, but parsed with a small hand-rolled positional scanner (in the
style of the teacher's DIMACS reader) rather than a naive `split(',')`: a
[`StabilityLabel`](crate::structures::label::StabilityLabel)'s own textual
form embeds commas, so the annotated line can't be split on every comma.
*/

use crate::structures::label::StabilityLabel;
use crate::types::err::ParseError;

/// `AS=<sys>,K=<q1>+<q2>+…`, a single unannotated dataset item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatasetItem {
    pub system_name: String,
    pub knowledge_base: Vec<String>,
}

impl std::fmt::Display for DatasetItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AS={},K={}", self.system_name, self.knowledge_base.join("+"))
    }
}

impl std::str::FromStr for DatasetItem {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let rest = line.strip_prefix("AS=").ok_or(ParseError::MissingDelimiter)?;
        let k_at = rest.find(",K=").ok_or(ParseError::MissingDelimiter)?;
        let system_name = rest[..k_at].to_string();
        let knowledge_str = &rest[k_at + ",K=".len()..];
        if knowledge_str.is_empty() {
            return Err(ParseError::Empty);
        }
        let knowledge_base = knowledge_str.split('+').map(str::to_string).collect();
        Ok(DatasetItem { system_name, knowledge_base })
    }
}

/// `AS=<sys>,K=<q1>+<q2>+…,t=<literal>,acc=<label>,stab=<label>`, a dataset
/// item annotated with ground-truth acceptability and stability labels for
/// one topic literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnnotatedDatasetItem {
    pub system_name: String,
    pub knowledge_base: Vec<String>,
    pub topic_literal: String,
    pub acceptability: StabilityLabel,
    pub stability: StabilityLabel,
}

impl std::fmt::Display for AnnotatedDatasetItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "AS={},K={},t={},acc={},stab={}",
            self.system_name,
            self.knowledge_base.join("+"),
            self.topic_literal,
            self.acceptability,
            self.stability,
        )
    }
}

impl std::str::FromStr for AnnotatedDatasetItem {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let rest = line.strip_prefix("AS=").ok_or(ParseError::MissingDelimiter)?;
        let k_at = rest.find(",K=").ok_or(ParseError::MissingDelimiter)?;
        let system_name = rest[..k_at].to_string();

        let after_k = &rest[k_at + ",K=".len()..];
        let t_at = after_k.find(",t=").ok_or(ParseError::MissingDelimiter)?;
        let knowledge_base = after_k[..t_at].split('+').map(str::to_string).collect();

        let after_t = &after_k[t_at + ",t=".len()..];
        let acc_at = after_t.find(",acc=").ok_or(ParseError::MissingDelimiter)?;
        let topic_literal = after_t[..acc_at].to_string();

        let after_acc = &after_t[acc_at + ",acc=".len()..];
        let stab_at = after_acc.find(",stab=").ok_or(ParseError::MissingDelimiter)?;
        let acceptability = after_acc[..stab_at].parse::<StabilityLabel>()?;

        let stability = after_acc[stab_at + ",stab=".len()..].parse::<StabilityLabel>()?;

        Ok(AnnotatedDatasetItem { system_name, knowledge_base, topic_literal, acceptability, stability })
    }
}

/// A whole dataset sample file: a name, the argumentation system it was
/// generated from, and the (unannotated) observation sets sampled from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatasetFile {
    pub dataset_name: String,
    pub system_name: String,
    pub items: Vec<DatasetItem>,
}

impl DatasetFile {
    /// Parses a dataset sample file, reporting the 1-indexed line of the
    /// first malformed item via [`ParseError::Line`].
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut lines = text.lines();
        let dataset_name = lines.next().ok_or(ParseError::Empty)?.to_string();
        let system_name = lines.next().ok_or(ParseError::Empty)?.to_string();

        let mut items = Vec::new();
        for (offset, line) in lines.enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let item = line.parse::<DatasetItem>().map_err(|_| ParseError::Line(offset + 3))?;
            items.push(item);
        }
        Ok(DatasetFile { dataset_name, system_name, items })
    }

    /// Renders the file back to its line-oriented text form.
    pub fn render(&self) -> String {
        let mut lines = vec![self.dataset_name.clone(), self.system_name.clone()];
        lines.extend(self.items.iter().map(DatasetItem::to_string));
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_item_round_trips() {
        let item = DatasetItem { system_name: "mini_fraud".to_string(), knowledge_base: vec!["sent".to_string(), "paid".to_string()] };
        let text = item.to_string();
        assert_eq!(text, "AS=mini_fraud,K=sent+paid");
        assert_eq!(text.parse::<DatasetItem>().unwrap(), item);
    }

    #[test]
    fn annotated_item_survives_embedded_commas_in_labels() {
        let item = AnnotatedDatasetItem {
            system_name: "mini_fraud".to_string(),
            knowledge_base: vec!["sent".to_string()],
            topic_literal: "fraud".to_string(),
            acceptability: StabilityLabel::new(false, true, false, false),
            stability: StabilityLabel::TOP,
        };
        let text = item.to_string();
        assert_eq!(text, "AS=mini_fraud,K=sent,t=fraud,acc=(U:False, D:True, O:False, B:False),stab=(U:True, D:True, O:True, B:True)");
        assert_eq!(text.parse::<AnnotatedDatasetItem>().unwrap(), item);
    }

    #[test]
    fn dataset_file_parses_header_and_items() {
        let text = "demo\nmini_fraud\nAS=mini_fraud,K=sent\nAS=mini_fraud,K=paid+sent\n";
        let file = DatasetFile::parse(text).unwrap();
        assert_eq!(file.dataset_name, "demo");
        assert_eq!(file.system_name, "mini_fraud");
        assert_eq!(file.items.len(), 2);
        assert_eq!(file.items[1].knowledge_base, vec!["paid".to_string(), "sent".to_string()]);
    }

    #[test]
    fn malformed_item_reports_its_line_number() {
        let text = "demo\nmini_fraud\nAS=mini_fraud,K=sent\nnot a dataset item\n";
        let err = DatasetFile::parse(text).unwrap_err();
        assert_eq!(err, ParseError::Line(4));
    }
}
