use std::cell::RefCell;
use std::rc::Rc;

use shapekit_designer::{ChangeKind, ChangePhase, ModelChange, Shape, ShapeModel};

fn three_shapes() -> ShapeModel {
    ShapeModel::with_shapes(vec![
        Shape::rectangle(),
        Shape::ellipse(),
        Shape::rounded_rect(),
    ])
}

fn record(model: &mut ShapeModel) -> Rc<RefCell<Vec<ModelChange>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    model.add_observer(move |change: &ModelChange| sink.borrow_mut().push(*change));
    log
}

fn assert_selection_valid(model: &ShapeModel) {
    if let Some(index) = model.selected_shape_index() {
        assert!(index < model.len(), "selection {} past {}", index, model.len());
    }
}

#[test]
fn test_insert_then_remove_restores_model() {
    let mut model = three_shapes();
    let before: Vec<Shape> = model.shapes().to_vec();
    let log = record(&mut model);

    let mut extra = Shape::ellipse();
    extra.name = "Extra".to_string();
    model.insert(extra.clone(), 1).unwrap();
    assert_eq!(model.len(), 4);
    let removed = model.remove(1).unwrap();

    assert_eq!(removed, extra);
    assert_eq!(model.shapes(), before.as_slice());
    assert_eq!(
        *log.borrow(),
        vec![
            ModelChange::pre(ChangeKind::ShapeInserted(1)),
            ModelChange::post(ChangeKind::ShapeInserted(1)),
            ModelChange::pre(ChangeKind::ShapeRemoved(1)),
            ModelChange::post(ChangeKind::ShapeRemoved(1)),
        ]
    );
}

#[test]
fn test_select_is_idempotent() {
    let mut model = three_shapes();
    let log = record(&mut model);

    model.select_shape(2).unwrap();
    assert_eq!(log.borrow().len(), 2);
    model.select_shape(2).unwrap();
    assert_eq!(log.borrow().len(), 2);

    model.deselect_shape();
    assert_eq!(model.selected_shape_index(), None);
    assert_eq!(
        log.borrow().last(),
        Some(&ModelChange::post(ChangeKind::SelectionChanged {
            old: Some(2),
            new: None
        }))
    );
}

#[test]
fn test_pre_notification_sees_old_state() {
    let mut model = three_shapes();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    model.add_observer(move |change: &ModelChange| {
        sink.borrow_mut().push(change.phase);
    });

    model.select_shape(0).unwrap();
    assert_eq!(*seen.borrow(), vec![ChangePhase::Pre, ChangePhase::Post]);
}

#[test]
fn test_removing_selected_shape_clears_selection() {
    let mut model = three_shapes();
    model.select_shape(1).unwrap();
    let log = record(&mut model);

    model.remove(1).unwrap();
    assert_eq!(model.selected_shape_index(), None);
    assert_selection_valid(&model);
    assert_eq!(
        log.borrow()[0],
        ModelChange::pre(ChangeKind::SelectionChanged {
            old: Some(1),
            new: None
        })
    );
    assert_eq!(
        log.borrow()[2],
        ModelChange::pre(ChangeKind::ShapeRemoved(1))
    );
}

#[test]
fn test_removing_shape_before_selection_shifts_it() {
    let mut model = three_shapes();
    model.select_shape(2).unwrap();

    model.remove(0).unwrap();
    assert_eq!(model.selected_shape_index(), Some(1));
    assert_eq!(
        model.selected_shape().map(|s| s.name.as_str()),
        Some("Rounded Rectangle")
    );
    assert_selection_valid(&model);
}

#[test]
fn test_removing_last_selected_shape() {
    let mut model = three_shapes();
    model.select_shape(2).unwrap();

    model.remove(2).unwrap();
    assert_eq!(model.selected_shape_index(), None);
    assert_selection_valid(&model);
}

#[test]
fn test_delete_shape_deselects_first() {
    let mut model = three_shapes();
    model.select_shape(0).unwrap();

    let removed = model.delete_shape(2).unwrap();
    assert_eq!(removed.name, "Rounded Rectangle");
    assert_eq!(model.selected_shape_index(), None);
    assert_eq!(model.len(), 2);
}

#[test]
fn test_shape_at_picks_first_match() {
    let model = three_shapes();
    assert_eq!(model.index_of_shape_at(shapekit_core::Point::ZERO), Some(0));
    assert!(model
        .shape_at(shapekit_core::Point::new(1000.0, 0.0))
        .is_none());
}
