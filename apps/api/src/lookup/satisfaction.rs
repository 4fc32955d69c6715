use std::collections::HashMap;

use thiserror::Error;

/// The classifier emitted a class index the codec has no label for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("classifier produced class index {index}, codec only knows 0..{known}")]
pub struct UnknownClassError {
    pub index: usize,
    pub known: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SatisfactionCodecError {
    #[error("satisfaction codec has no labels")]
    Empty,

    #[error("satisfaction label '{0}' appears more than once")]
    DuplicateLabel(String),
}

/// Bidirectional map between classifier output indices and satisfaction labels.
///
/// A label's position is its class index, the same convention the label encoder
/// used when the classifier was trained.
#[derive(Debug, Clone)]
pub struct SatisfactionCodec {
    labels: Vec<String>,
    index: HashMap<String, usize>,
}

impl SatisfactionCodec {
    pub fn new(labels: Vec<String>) -> Result<Self, SatisfactionCodecError> {
        if labels.is_empty() {
            return Err(SatisfactionCodecError::Empty);
        }

        let mut index = HashMap::with_capacity(labels.len());
        for (i, label) in labels.iter().enumerate() {
            if index.insert(label.clone(), i).is_some() {
                return Err(SatisfactionCodecError::DuplicateLabel(label.clone()));
            }
        }

        Ok(Self { labels, index })
    }

    pub fn decode(&self, class_index: usize) -> Result<&str, UnknownClassError> {
        self.labels
            .get(class_index)
            .map(String::as_str)
            .ok_or(UnknownClassError {
                index: class_index,
                known: self.labels.len(),
            })
    }

    #[cfg(test)]
    pub fn encode(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    #[cfg(test)]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> SatisfactionCodec {
        SatisfactionCodec::new(
            [
                "Very Satisfied",
                "Satisfied",
                "Neutral",
                "Dissatisfied",
                "Very Dissatisfied",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_decode_inverts_encode_for_every_label() {
        let codec = codec();
        for label in codec.labels() {
            let idx = codec.encode(label).unwrap();
            assert_eq!(codec.decode(idx).unwrap(), label);
        }
    }

    #[test]
    fn test_decode_class_one_is_satisfied() {
        assert_eq!(codec().decode(1).unwrap(), "Satisfied");
    }

    #[test]
    fn test_decode_out_of_range_fails() {
        let err = codec().decode(5).unwrap_err();
        assert_eq!(err, UnknownClassError { index: 5, known: 5 });
    }

    #[test]
    fn test_encode_unknown_label_is_none() {
        assert_eq!(codec().encode("Ecstatic"), None);
    }

    #[test]
    fn test_duplicate_label_rejected() {
        let err = SatisfactionCodec::new(vec!["Neutral".into(), "Neutral".into()]).unwrap_err();
        assert_eq!(err, SatisfactionCodecError::DuplicateLabel("Neutral".into()));
    }

    #[test]
    fn test_empty_codec_rejected() {
        assert_eq!(
            SatisfactionCodec::new(vec![]).unwrap_err(),
            SatisfactionCodecError::Empty
        );
    }
}
