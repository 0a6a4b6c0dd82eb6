use carepath_core::models::role::Role;
use carepath_core::models::screen_id::ScreenId;

#[test]
fn each_role_has_six_distinct_screens() {
    for role in [Role::Psychologist, Role::Psychiatrist] {
        let sequence = role.sequence();
        assert_eq!(sequence.len(), 6);
        let mut unique = sequence.to_vec();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 6, "{role} sequence has duplicates");
    }
    assert!(Role::None.sequence().is_empty());
}

#[test]
fn psychiatrist_sequence_opens_on_coordination_review() {
    assert_eq!(Role::Psychiatrist.sequence()[0], ScreenId::PsychPlanView);
    assert_eq!(Role::Psychologist.sequence()[0], ScreenId::SoundTherapy);
}

#[test]
fn screen_ids_parse_their_own_keys() {
    for id in ScreenId::ALL {
        assert_eq!(id.as_str().parse::<ScreenId>().unwrap(), id);
        assert_eq!(
            serde_json::to_value(id).unwrap(),
            serde_json::Value::String(id.as_str().to_string())
        );
    }
    assert!("home".parse::<ScreenId>().is_err());
}

#[test]
fn roles_serialize_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Psychiatrist).unwrap(), "\"psychiatrist\"");
    assert_eq!("none".parse::<Role>().unwrap(), Role::None);
    assert!("admin".parse::<Role>().is_err());
}
