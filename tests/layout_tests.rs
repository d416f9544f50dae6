mod common;

use common::TestResult;
use common::fixtures::rect_at;
use edlkit::{
    DefaultsTable, EdmObject, EdmTable, GenericOptions, LayoutError, Tiler, generic_screen,
    parse_screen,
};

#[test]
fn table_layout_round_trips_through_text() -> TestResult {
    common::init_logging();
    let mut table = EdmTable::with_borders(10, 10);
    table.add(rect_at(0, 0, 40, 20))?;
    table.next_cell(None);
    table.add(rect_at(0, 0, 40, 20))?;
    table.next_col();
    table.add(rect_at(0, 0, 60, 30))?;

    let defaults = DefaultsTable::builtin();
    let mut screen = EdmObject::with_defaults("Screen", &defaults);
    for ob in table.into_objects()? {
        screen.add_object(ob)?;
    }
    screen.autofit_dimensions(10, 10)?;

    let reparsed = parse_screen(&screen.to_edl())?;
    assert_eq!(reparsed.children().len(), 3);
    // first column stacks, second column starts past the first, the second
    // row clears the tall widget in the first row, and autofit pushes the
    // whole block out of the screen border
    assert_eq!(reparsed.children()[0].position()?, (10, 10));
    assert_eq!(reparsed.children()[1].position()?, (10, 50));
    assert_eq!(reparsed.children()[2].position()?, (60, 10));
    assert_eq!(reparsed.dimensions()?, (130, 80));
    Ok(())
}

#[test]
fn tiler_packs_column_major_within_its_box() -> TestResult {
    let mut tiler = Tiler::new(100, 100, 40, 20, 1);
    assert_eq!(tiler.capacity(), 6);
    for _ in 0..4 {
        tiler.add_object(rect_at(0, 0, 40, 20))?;
    }
    let obs = tiler.into_table().into_objects()?;
    let pos: Vec<_> = obs.iter().map(|ob| ob.position().unwrap()).collect();
    assert_eq!(pos, vec![(0, 0), (0, 30), (0, 60), (50, 0)]);
    Ok(())
}

#[test]
fn generic_screen_lays_widgets_out_without_overlap() -> TestResult {
    common::init_logging();
    let defaults = DefaultsTable::builtin();
    let mut obs = Vec::new();
    for _ in 0..5 {
        obs.push(rect_at(0, 0, 60, 30));
    }
    for _ in 0..3 {
        obs.push(rect_at(0, 0, 25, 25));
    }
    let screen = generic_screen(obs, &GenericOptions::default(), &defaults)?;
    assert!(screen.is_screen());
    assert_eq!(screen.children().len(), 8);

    let frames: Vec<_> = screen
        .children()
        .iter()
        .map(|ob| {
            let (x, y) = ob.position().unwrap();
            let (w, h) = ob.dimensions().unwrap();
            (x, y, w, h)
        })
        .collect();
    for (i, a) in frames.iter().enumerate() {
        for b in &frames[i + 1..] {
            let apart = a.0 + a.2 <= b.0
                || b.0 + b.2 <= a.0
                || a.1 + a.3 <= b.1
                || b.1 + b.3 <= a.1;
            assert!(apart, "{a:?} overlaps {b:?}");
        }
    }
    Ok(())
}

#[test]
fn position_seed_is_deterministic() -> TestResult {
    let defaults = DefaultsTable::builtin();
    let opts = GenericOptions {
        position_seed: Some("SR01C-VA".to_string()),
        ..GenericOptions::default()
    };
    let a = generic_screen(vec![rect_at(0, 0, 50, 20)], &opts, &defaults)?;
    let b = generic_screen(vec![rect_at(0, 0, 50, 20)], &opts, &defaults)?;
    assert_eq!(a.position()?, b.position()?);
    assert_ne!(a.position()?, (0, 0));
    Ok(())
}

#[test]
fn an_empty_widget_list_is_rejected() {
    let defaults = DefaultsTable::builtin();
    assert!(matches!(
        generic_screen(Vec::new(), &GenericOptions::default(), &defaults),
        Err(LayoutError::NoObjects)
    ));
}
