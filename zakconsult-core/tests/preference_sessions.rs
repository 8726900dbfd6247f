use zakconsult_core::{
    A11yFlag, A11yPreferences, FontScale, KeyValueStore, MemoryStore, PreferenceController,
    storage_keys,
};

#[derive(Clone, Copy, Debug)]
enum Action {
    Bigger,
    Smaller,
    Flip(A11yFlag),
}

fn run(ctl: &mut PreferenceController<&MemoryStore>, action: Action) -> A11yPreferences {
    match action {
        Action::Bigger => ctl.increase_font(),
        Action::Smaller => ctl.decrease_font(),
        Action::Flip(flag) => ctl.toggle(flag),
    }
}

fn action_pool() -> Vec<Action> {
    let mut pool = vec![Action::Bigger, Action::Smaller];
    pool.extend(A11yFlag::ALL.into_iter().map(Action::Flip));
    pool
}

#[test]
fn reload_restores_the_last_written_state() {
    let store = MemoryStore::new();
    let before = {
        let mut ctl = PreferenceController::load(&store);
        ctl.increase_font();
        ctl.increase_font();
        ctl.toggle(A11yFlag::Grayscale);
        ctl.toggle(A11yFlag::UnderlineLinks);
        ctl.toggle(A11yFlag::Grayscale);
        *ctl.preferences()
    };

    let reloaded = PreferenceController::load(&store);
    assert_eq!(*reloaded.preferences(), before);
    assert_eq!(before.font_scale.to_string(), "1.2");
    assert!(before.is_enabled(A11yFlag::UnderlineLinks));
    assert!(!before.is_enabled(A11yFlag::Grayscale));
}

#[test]
fn reset_is_total_for_any_history() {
    let pool = action_pool();
    // Walk a deterministic spread of histories of different lengths and orders.
    for seed in 0..64_usize {
        let store = MemoryStore::new();
        let mut ctl = PreferenceController::load(&store);
        let len = seed % 9 + 1;
        for step in 0..len {
            run(&mut ctl, pool[(seed * 7 + step * 5) % pool.len()]);
        }
        assert_eq!(ctl.reset(), A11yPreferences::default());
        for key in storage_keys() {
            assert_eq!(store.get(key).unwrap(), None, "seed {seed} left {key}");
        }
        assert_eq!(
            *PreferenceController::load(&store).preferences(),
            A11yPreferences::default()
        );
    }
}

#[test]
fn font_scale_never_leaves_its_tenths_grid() {
    let store = MemoryStore::new();
    let mut ctl = PreferenceController::load(&store);
    let pattern = [true, true, false, true, true, true, true, true, true, false, false];
    for (i, bigger) in pattern.iter().cycle().take(80).enumerate() {
        let prefs = if *bigger {
            ctl.increase_font()
        } else {
            ctl.decrease_font()
        };
        assert!(prefs.font_scale >= FontScale::MIN && prefs.font_scale <= FontScale::MAX);
        let stored = store.get("a11y-font-scale").unwrap();
        if let Some(raw) = stored {
            assert_eq!(FontScale::from_stored(&raw), Some(prefs.font_scale), "step {i}");
            assert!(raw.len() <= 3, "unexpected precision in {raw}");
        }
    }
}

#[test]
fn persisted_values_agree_with_snapshot_after_every_toggle() {
    let store = MemoryStore::new();
    let mut ctl = PreferenceController::load(&store);
    for flag in A11yFlag::ALL.into_iter().chain(A11yFlag::ALL).chain([A11yFlag::ReadableFont]) {
        let prefs = ctl.toggle(flag);
        for (other, enabled) in prefs.flags() {
            let stored = store.get(other.storage_key()).unwrap();
            match stored.as_deref() {
                Some(raw) => assert_eq!(raw == "true", enabled),
                None => assert!(!enabled),
            }
        }
    }
}
