//! Property tests for the finger-joint edge generator

use fingerbox_core::{Direction, Point};
use fingerbox_joinery::edge_joint::{
    division_count, division_widths, generate_tabbed_edge, nominal_widths, EdgeSpec,
    JointSettings,
};
use fingerbox_joinery::JointKind;
use proptest::prelude::*;

const EPS: f64 = 1e-9;

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::PosX),
        Just(Direction::PosY),
        Just(Direction::NegX),
        Just(Direction::NegY),
    ]
}

fn kind() -> impl Strategy<Value = JointKind> {
    prop_oneof![Just(JointKind::Tab), Just(JointKind::Slot)]
}

fn offset() -> impl Strategy<Value = f64> {
    prop_oneof![Just(-1.0), Just(0.0), Just(1.0)]
}

proptest! {
    #[test]
    fn divisions_are_odd_and_positive(length in 0.0f64..2000.0, nominal_tab in 0.5f64..100.0) {
        let divisions = division_count(length, nominal_tab);
        prop_assert!(divisions >= 1);
        prop_assert_eq!(divisions % 2, 1);
    }

    #[test]
    fn equal_widths_tile_the_edge(nominal_tab in 1.0f64..50.0, factor in 3.0f64..40.0) {
        let length = nominal_tab * factor;
        let settings = JointSettings { thickness: 1.0, nominal_tab, equal_tabs: true, correction: 0.0 };
        let w = nominal_widths(&settings, length);
        prop_assert!((w.tab - w.gap).abs() < EPS);
        prop_assert!((w.divisions as f64 * w.tab - length).abs() < 1e-6);
    }

    #[test]
    fn proportional_widths_tile_the_edge(nominal_tab in 1.0f64..50.0, factor in 3.0f64..40.0) {
        let length = nominal_tab * factor;
        let settings = JointSettings { thickness: 1.0, nominal_tab, equal_tabs: false, correction: 0.0 };
        let w = nominal_widths(&settings, length);
        prop_assert_eq!(w.tab, nominal_tab);
        prop_assert!((w.total() - length).abs() < 1e-6);
    }

    #[test]
    fn mating_corrections_cancel(
        nominal_tab in 1.0f64..50.0,
        factor in 3.0f64..40.0,
        correction in -1.0f64..1.0,
        equal_tabs in any::<bool>(),
    ) {
        let length = nominal_tab * factor;
        let settings = JointSettings { thickness: 1.0, nominal_tab, equal_tabs, correction };
        let tab = division_widths(&settings, length, JointKind::Tab);
        let slot = division_widths(&settings, length, JointKind::Slot);
        let nominal = nominal_widths(&settings, length);

        prop_assert_eq!(tab.divisions, slot.divisions);
        prop_assert!((tab.tab + tab.gap - (nominal.tab + nominal.gap)).abs() < 1e-9);
        prop_assert!((slot.tab + slot.gap - (nominal.tab + nominal.gap)).abs() < 1e-9);
        prop_assert!((tab.tab + slot.tab - 2.0 * nominal.tab).abs() < 1e-9);
        prop_assert!((tab.first_offset + slot.first_offset).abs() < 1e-12);
    }

    #[test]
    fn instruction_count_is_divisions_plus_one(
        length in 1.0f64..1000.0,
        nominal_tab in 1.0f64..50.0,
        direction in direction(),
        kind in kind(),
        equal_tabs in any::<bool>(),
    ) {
        let settings = JointSettings { thickness: 3.0, nominal_tab, equal_tabs, correction: 0.2 };
        let spec = EdgeSpec {
            root: Point::new(10.0, 20.0),
            start_offset: (0.0, 1.0),
            end_offset: (1.0, 0.0),
            tab_height: 3.0,
            length,
            direction,
            kind,
        };
        let edge = generate_tabbed_edge(&settings, &spec);
        let divisions = division_count(length, nominal_tab);
        prop_assert_eq!(edge.transitions.len(), divisions - 1);
        prop_assert_eq!(edge.instruction_count(), divisions + 1);
        prop_assert_eq!(edge.vertices().len(), 2 * divisions);
    }

    #[test]
    fn end_point_is_exact(
        x in -500.0f64..500.0,
        y in -500.0f64..500.0,
        start in (offset(), offset()),
        end in (offset(), offset()),
        length in 1.0f64..1000.0,
        direction in direction(),
        kind in kind(),
    ) {
        let settings = JointSettings { thickness: 3.0, nominal_tab: 7.0, equal_tabs: false, correction: 0.31 };
        let root = Point::new(x, y);
        let spec = EdgeSpec {
            root,
            start_offset: start,
            end_offset: end,
            tab_height: -3.0,
            length,
            direction,
            kind,
        };
        let edge = generate_tabbed_edge(&settings, &spec);
        let expected = root + Point::new(end.0 * 3.0, end.1 * 3.0) + direction.unit() * length;
        prop_assert_eq!(edge.end, expected);
        prop_assert_eq!(edge.start, root + Point::new(start.0 * 3.0, start.1 * 3.0));

        // travel-axis displacement equals the nominal length up to the offsets
        let along = edge.net_displacement();
        let offset_shift = Point::new((end.0 - start.0) * 3.0, (end.1 - start.1) * 3.0);
        let travel = along - offset_shift;
        let unit = direction.unit();
        prop_assert!((travel.x * unit.x + travel.y * unit.y - length).abs() < 1e-9);
    }

    #[test]
    fn tab_profile_never_drifts(
        length in 10.0f64..1000.0,
        tab_height in prop_oneof![Just(-3.0), Just(3.0)],
        direction in direction(),
    ) {
        let settings = JointSettings { thickness: 3.0, nominal_tab: 5.0, equal_tabs: false, correction: 0.1 };
        let spec = EdgeSpec {
            root: Point::ORIGIN,
            start_offset: (0.0, 0.0),
            end_offset: (0.0, 0.0),
            tab_height,
            length,
            direction,
            kind: JointKind::Tab,
        };
        let edge = generate_tabbed_edge(&settings, &spec);
        let across = direction.across();
        // every step lands either on the baseline or one tab height away
        for t in &edge.transitions {
            let offset = t.step.x * across.x + t.step.y * across.y;
            prop_assert!(offset.abs() < EPS || (offset - tab_height).abs() < EPS);
        }
        // an odd division count means the walk ends back on the baseline
        if let Some(last) = edge.transitions.last() {
            let offset = last.step.x * across.x + last.step.y * across.y;
            prop_assert!(offset.abs() < EPS);
        }
    }
}

#[test]
fn equal_tabs_scenario() {
    let settings = JointSettings {
        thickness: 10.0,
        nominal_tab: 25.0,
        equal_tabs: true,
        correction: 0.0,
    };
    let w = nominal_widths(&settings, 90.0);
    assert_eq!(w.divisions, 3);
    assert!((w.tab - 30.0).abs() < EPS);
    assert!((w.gap - 30.0).abs() < EPS);
}

#[test]
fn slot_edge_starts_on_outer_line() {
    let settings = JointSettings {
        thickness: 10.0,
        nominal_tab: 25.0,
        equal_tabs: false,
        correction: 0.49,
    };
    let spec = EdgeSpec {
        root: Point::new(0.0, 0.0),
        start_offset: (0.0, 0.0),
        end_offset: (0.0, 0.0),
        tab_height: 10.0,
        length: 100.0,
        direction: Direction::PosX,
        kind: JointKind::Slot,
    };
    let edge = generate_tabbed_edge(&settings, &spec);
    // gap 37.5 + 0.49 less the 0.245 first offset, then a notch one thickness deep
    let first = edge.transitions[0];
    assert!((first.advance.x - 37.745).abs() < EPS);
    assert_eq!(first.advance.y, 0.0);
    assert_eq!(first.step.y, 10.0);
    // notch narrowed by the correction
    let second = edge.transitions[1];
    assert!((second.advance.x - first.advance.x - 24.51).abs() < EPS);
    assert_eq!(second.step.y, 0.0);
}
