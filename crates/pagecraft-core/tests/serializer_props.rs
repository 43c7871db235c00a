//! Serializer properties

use pagecraft_content::{ArtifactDraft, ArtifactKind};
use pagecraft_core::PersistedArtifact;
use proptest::prelude::*;
use serde_json::json;

fn kind() -> impl Strategy<Value = ArtifactKind> {
    prop_oneof![
        Just(ArtifactKind::ProductPage),
        Just(ArtifactKind::Faq),
        Just(ArtifactKind::Comparison),
    ]
}

proptest! {
    #[test]
    fn extra_keys_never_survive(kind in kind(), keys in prop::collection::vec("[a-z_]{1,12}", 0..8)) {
        let mut draft = ArtifactDraft::new(kind);
        for key in &keys {
            draft.set(format!("x_{key}"), json!(key));
        }
        let persisted = PersistedArtifact::from_draft(&draft);
        let object = persisted.value().as_object().unwrap();
        prop_assert!(object.keys().all(|k| !k.starts_with("x_")));
    }

    #[test]
    fn encoding_is_stable(kind in kind(), title in ".{0,32}") {
        let mut draft = ArtifactDraft::new(kind);
        draft.set("title", json!(title));
        let a = PersistedArtifact::from_draft(&draft).to_json_bytes().unwrap();
        let b = PersistedArtifact::from_draft(&draft.clone()).to_json_bytes().unwrap();
        prop_assert_eq!(a, b);
    }
}
