use super::*;

#[test]
fn advance_cycle_moves_to_next_message_while_mounted() {
    let owner = Owner::new();
    owner.with(|| {
        let cycle = RwSignal::new(MessageCycle::default());
        assert!(advance_cycle(cycle));
        assert_eq!(cycle.get_untracked().index(), 1);
        assert!(advance_cycle(cycle));
        assert_eq!(cycle.get_untracked().index(), 0);
    });
}

#[test]
fn advance_cycle_is_inert_after_unmount() {
    let owner = Owner::new();
    let cycle = owner.with(|| RwSignal::new(MessageCycle::default()));
    owner.cleanup();
    assert!(!advance_cycle(cycle));
}
