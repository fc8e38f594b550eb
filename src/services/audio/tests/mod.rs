//! Unit tests for the stream registry
//!
//! Uses the in-memory property store and backend; no filesystem access.

#![allow(clippy::panic, clippy::unwrap_used)]

use serde_json::{Value, json};

use crate::services::audio::{
    AudioBackend, AudioError, BackendError, DEFAULT_VOLUME, MemoryBackend, MemoryStore,
    PropertyNamespace, PropertyStore, StreamId, StreamKind, StreamRegistry, default_volume_from,
    shaper,
};

type TestRegistry = StreamRegistry<MemoryStore, MemoryBackend>;

fn registry() -> TestRegistry {
    StreamRegistry::new(MemoryStore::new(), MemoryBackend::new(), DEFAULT_VOLUME).unwrap()
}

fn persisted(registry: &TestRegistry, kind: StreamKind) -> Option<String> {
    registry
        .store()
        .get(&format!("audio.volume.{}", kind.name()), PropertyNamespace::Persist)
        .unwrap()
}

mod initialization {
    use super::*;

    #[test]
    fn writes_default_for_every_stream() {
        let registry = registry();

        for kind in StreamKind::ALL {
            assert_eq!(persisted(&registry, kind), Some("60".to_string()));
            assert_eq!(registry.backend().stream_volume(kind.id()), Some(60));
        }
    }

    #[test]
    fn keeps_existing_values() {
        let store = MemoryStore::with_persisted([("audio.volume.tts", "25")]);
        let registry = StreamRegistry::new(store, MemoryBackend::new(), 80).unwrap();

        assert_eq!(persisted(&registry, StreamKind::Tts), Some("25".to_string()));
        assert_eq!(persisted(&registry, StreamKind::Ring), Some("80".to_string()));
        assert_eq!(registry.backend().stream_volume(StreamKind::Tts.id()), Some(25));
    }

    #[test]
    fn second_run_changes_nothing() {
        let registry = registry();
        registry.set_volume(Some(StreamKind::Alarm.id()), 15.0).unwrap();

        let defaulted = registry.initialize().unwrap();

        assert_eq!(defaulted, 0);
        assert_eq!(persisted(&registry, StreamKind::Alarm), Some("15".to_string()));
        assert_eq!(persisted(&registry, StreamKind::Tts), Some("60".to_string()));
    }

    #[test]
    fn clamps_default_volume() {
        let registry =
            StreamRegistry::new(MemoryStore::new(), MemoryBackend::new(), 250).unwrap();

        assert_eq!(registry.default_volume(), 100);
        assert_eq!(persisted(&registry, StreamKind::Audio), Some("100".to_string()));
    }
}

mod set_volume {
    use super::*;

    #[test]
    fn persists_and_forwards() {
        let registry = registry();

        registry.set_volume(Some(StreamKind::Ring.id()), 42.7).unwrap();

        assert_eq!(persisted(&registry, StreamKind::Ring), Some("42".to_string()));
        assert_eq!(registry.backend().stream_volume(StreamKind::Ring.id()), Some(42));
    }

    #[test]
    fn clamps_out_of_range_values() {
        let registry = registry();

        registry.set_volume(Some(StreamKind::Tts.id()), 150.0).unwrap();
        assert_eq!(persisted(&registry, StreamKind::Tts), Some("100".to_string()));
        assert_eq!(registry.backend().stream_volume(StreamKind::Tts.id()), Some(100));

        registry.set_volume(Some(StreamKind::Tts.id()), -10.0).unwrap();
        assert_eq!(persisted(&registry, StreamKind::Tts), Some("0".to_string()));
        assert_eq!(registry.backend().stream_volume(StreamKind::Tts.id()), Some(0));
    }

    #[test]
    fn rejects_nan() {
        let registry = registry();

        let result = registry.set_volume(Some(StreamKind::Tts.id()), f64::NAN);

        assert!(matches!(
            result,
            Err(AudioError::InvalidArgument { arg: "volume", .. })
        ));
        assert_eq!(persisted(&registry, StreamKind::Tts), Some("60".to_string()));
    }

    #[test]
    fn rejects_unknown_stream() {
        let registry = registry();

        let result = registry.set_volume(Some(StreamId(9999)), 10.0);

        assert!(matches!(result, Err(AudioError::UnknownStream(StreamId(9999)))));
    }

    #[test]
    fn system_stream_is_readonly() {
        let registry = registry();

        for volume in [0.0, 50.0, 100.0] {
            let result = registry.set_volume(Some(StreamKind::System.id()), volume);

            assert!(matches!(
                result,
                Err(AudioError::PermissionDenied { stream: "system" })
            ));
        }
        assert_eq!(persisted(&registry, StreamKind::System), Some("60".to_string()));
    }

    #[test]
    fn broadcast_writes_fixed_subset() {
        let registry = registry();

        registry.set_volume(None, 30.0).unwrap();

        for kind in [
            StreamKind::Audio,
            StreamKind::Playback,
            StreamKind::Tts,
            StreamKind::Ring,
        ] {
            assert_eq!(persisted(&registry, kind), Some("30".to_string()));
        }
        for kind in [StreamKind::VoiceCall, StreamKind::Alarm, StreamKind::System] {
            assert_eq!(persisted(&registry, kind), Some("60".to_string()));
        }
    }

    /// Backend whose driver refuses volume changes on one stream
    struct RefusingBackend {
        inner: MemoryBackend,
        refused: StreamId,
    }

    impl AudioBackend for RefusingBackend {
        fn set_stream_volume(&self, stream: StreamId, volume: u8) -> Result<(), BackendError> {
            if stream == self.refused && volume != DEFAULT_VOLUME {
                return Err(BackendError::Rejected {
                    operation: "set_stream_volume",
                    details: "stream locked".to_string(),
                });
            }

            self.inner.set_stream_volume(stream, volume)
        }

        fn is_stream_playing(&self, stream: StreamId) -> bool {
            self.inner.is_stream_playing(stream)
        }

        fn is_muted(&self) -> bool {
            self.inner.is_muted()
        }

        fn set_mute(&self, muted: bool) -> Result<(), BackendError> {
            self.inner.set_mute(muted)
        }

        fn set_curve_point(&self, index: u32, value: f64) -> Result<(), BackendError> {
            self.inner.set_curve_point(index, value)
        }
    }

    #[test]
    fn broadcast_stops_at_first_failure_without_rollback() {
        let backend = RefusingBackend {
            inner: MemoryBackend::new(),
            refused: StreamKind::Tts.id(),
        };
        let registry = StreamRegistry::new(MemoryStore::new(), backend, DEFAULT_VOLUME).unwrap();
        let volume_of = |kind: StreamKind| {
            registry
                .store()
                .get(&format!("audio.volume.{}", kind.name()), PropertyNamespace::Persist)
                .unwrap()
        };

        let result = registry.set_volume(None, 30.0);

        assert!(matches!(
            result,
            Err(AudioError::Backend(BackendError::Rejected { .. }))
        ));
        assert_eq!(volume_of(StreamKind::Audio), Some("30".to_string()));
        assert_eq!(volume_of(StreamKind::Playback), Some("30".to_string()));
        assert_eq!(volume_of(StreamKind::Ring), Some("60".to_string()));
        assert_eq!(
            registry.backend().inner.stream_volume(StreamKind::Playback.id()),
            Some(30)
        );
        assert_eq!(
            registry.backend().inner.stream_volume(StreamKind::Ring.id()),
            Some(60)
        );
    }

    #[test]
    fn broadcast_rejects_nan_before_writing() {
        let registry = registry();

        assert!(registry.set_volume(None, f64::NAN).is_err());
        assert_eq!(persisted(&registry, StreamKind::Audio), Some("60".to_string()));
    }
}

mod get_volume {
    use super::*;

    #[test]
    fn defaults_to_tts() {
        let registry = registry();
        registry.set_volume(Some(StreamKind::Tts.id()), 35.0).unwrap();

        assert_eq!(registry.get_volume(None).unwrap(), Some(35));
        assert_eq!(registry.get_volume(Some(StreamKind::Tts.id())).unwrap(), Some(35));
    }

    #[test]
    fn zero_is_a_real_volume() {
        let registry = registry();
        registry.set_volume(Some(StreamKind::Alarm.id()), 0.0).unwrap();

        assert_eq!(registry.get_volume(Some(StreamKind::Alarm.id())).unwrap(), Some(0));
    }

    #[test]
    fn unparsable_value_is_unset() {
        let registry = registry();
        registry
            .store()
            .set("audio.volume.ring", "loud", PropertyNamespace::Persist)
            .unwrap();

        assert_eq!(registry.get_volume(Some(StreamKind::Ring.id())).unwrap(), None);
    }

    #[test]
    fn unknown_stream_fails() {
        let registry = registry();

        assert!(matches!(
            registry.get_volume(Some(StreamId(9999))),
            Err(AudioError::UnknownStream(StreamId(9999)))
        ));
    }
}

mod playback_and_mute {
    use super::*;

    #[test]
    fn mute_passes_through() {
        let registry = registry();
        assert!(!registry.is_muted());

        registry.set_mute(true).unwrap();
        assert!(registry.is_muted());
        assert!(registry.backend().is_muted());

        registry.set_mute(false).unwrap();
        assert!(!registry.is_muted());
    }

    #[test]
    fn playing_status_defaults_to_tts() {
        let registry = registry();
        registry.backend().set_playing(StreamKind::Tts.id(), true);

        assert!(registry.get_playing_status(None).unwrap());
        assert!(!registry.get_playing_status(Some(StreamKind::Ring.id())).unwrap());
    }

    #[test]
    fn playing_status_rejects_unknown_stream() {
        let registry = registry();

        assert!(matches!(
            registry.get_playing_status(Some(StreamId(42))),
            Err(AudioError::UnknownStream(StreamId(42)))
        ));
    }
}

mod names {
    use super::*;

    #[test]
    fn resolves_catalog_names() {
        let registry = registry();

        assert_eq!(registry.get_stream_name(StreamKind::Tts.id()), Some("tts"));
        assert_eq!(
            registry.get_stream_name(StreamKind::VoiceCall.id()),
            Some("voiceCall")
        );
        assert_eq!(registry.get_stream_name(StreamId(9999)), None);
    }

    #[test]
    fn catalog_is_closed_and_ordered() {
        let registry = registry();
        let ids: Vec<u32> = registry.descriptors().map(|d| d.id.0).collect();

        assert_eq!(ids, vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(
            registry
                .descriptors()
                .filter(|d| d.readonly)
                .map(|d| d.name)
                .collect::<Vec<_>>(),
            vec!["system"]
        );
    }

    #[test]
    fn kinds_round_trip_through_names_and_ids() {
        for kind in StreamKind::ALL {
            assert_eq!(StreamKind::from_name(kind.name()), Some(kind));
            assert_eq!(StreamKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(StreamKind::from_name("voicecall"), None);
    }
}

mod volume_shaper {
    use super::*;

    /// Backend that rejects curve points from a given index on
    struct RejectingBackend {
        inner: MemoryBackend,
        reject_from: u32,
    }

    impl AudioBackend for RejectingBackend {
        fn set_stream_volume(&self, stream: StreamId, volume: u8) -> Result<(), BackendError> {
            self.inner.set_stream_volume(stream, volume)
        }

        fn is_stream_playing(&self, stream: StreamId) -> bool {
            self.inner.is_stream_playing(stream)
        }

        fn is_muted(&self) -> bool {
            self.inner.is_muted()
        }

        fn set_mute(&self, muted: bool) -> Result<(), BackendError> {
            self.inner.set_mute(muted)
        }

        fn set_curve_point(&self, index: u32, value: f64) -> Result<(), BackendError> {
            if index >= self.reject_from {
                return Err(BackendError::Rejected {
                    operation: "set_curve_point",
                    details: "driver busy".to_string(),
                });
            }

            self.inner.set_curve_point(index, value)
        }
    }

    #[test]
    fn applies_all_points() {
        let registry = registry();

        registry.set_volume_shaper(shaper::linear).unwrap();

        assert_eq!(registry.backend().curve_len(), 101);
        assert_eq!(registry.backend().curve_point(50), Some(50.0));
    }

    #[test]
    fn shaper_receives_highest_index() {
        let registry = registry();
        let mut seen = None;

        registry
            .set_volume_shaper(|max| {
                seen = Some(max);
                shaper::logarithmic(max)
            })
            .unwrap();

        assert_eq!(seen, Some(100));
    }

    #[test]
    fn non_sequence_is_structural_error() {
        let registry = registry();

        for returned in [json!({ "0": 1 }), json!(12), Value::Null] {
            let result = registry.set_volume_shaper(|_| returned.clone());
            assert!(matches!(result, Err(AudioError::Structural(_))));
        }
        assert_eq!(registry.backend().curve_len(), 0);
    }

    #[test]
    fn out_of_range_point_stops_without_rollback() {
        let registry = registry();

        let result = registry.set_volume_shaper(|max| {
            (0..=max)
                .map(|index| if index == 40 { 250.0 } else { f64::from(index) })
                .collect::<Vec<f64>>()
                .into()
        });

        assert!(matches!(result, Err(AudioError::Range { index: 40, .. })));
        assert_eq!(registry.backend().curve_len(), 40);
        assert_eq!(registry.backend().curve_point(39), Some(39.0));
        assert_eq!(registry.backend().curve_point(40), None);
    }

    #[test]
    fn short_curve_is_range_error() {
        let registry = registry();

        let result = registry.set_volume_shaper(|_| json!([0, 10, 20]));

        assert!(matches!(result, Err(AudioError::Range { index: 3, .. })));
        assert_eq!(registry.backend().curve_len(), 3);
    }

    #[test]
    fn non_numeric_point_is_range_error() {
        let registry = registry();

        let result = registry.set_volume_shaper(|_| json!([0, "ten"]));

        assert!(matches!(result, Err(AudioError::Range { index: 1, .. })));
    }

    #[test]
    fn other_backend_failures_pass_through() {
        let backend = RejectingBackend {
            inner: MemoryBackend::new(),
            reject_from: 10,
        };
        let registry = StreamRegistry::new(MemoryStore::new(), backend, DEFAULT_VOLUME).unwrap();

        let result = registry.set_volume_shaper(shaper::linear);

        assert!(matches!(
            result,
            Err(AudioError::Backend(BackendError::Rejected { .. }))
        ));
        assert_eq!(registry.backend().inner.curve_len(), 10);
    }
}

mod default_volume {
    use super::*;

    #[test]
    fn missing_config_uses_constant() {
        assert_eq!(default_volume_from(None), 60);
        assert_eq!(default_volume_from(Some(&json!({}))), 60);
        assert_eq!(default_volume_from(Some(&json!({ "audio": 5 }))), 60);
    }

    #[test]
    fn non_numeric_config_uses_constant() {
        let config = json!({ "audio": { "volume": { "default": "loud" } } });
        assert_eq!(default_volume_from(Some(&config)), 60);

        let config = json!({ "audio": { "volume": { "default": null } } });
        assert_eq!(default_volume_from(Some(&config)), 60);
    }

    #[test]
    fn numeric_config_is_clamped_and_floored() {
        let config = json!({ "audio": { "volume": { "default": 45.8 } } });
        assert_eq!(default_volume_from(Some(&config)), 45);

        let config = json!({ "audio": { "volume": { "default": 400 } } });
        assert_eq!(default_volume_from(Some(&config)), 100);
    }
}
