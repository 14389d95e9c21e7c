use std::cell::{Cell, RefCell};
use std::rc::Rc;

use chart_transform::core::{
    AxisTransform, ChartTransform, ChartTransformConfig, Orientation, Range,
};

fn counting_listener(transform: &mut ChartTransform) -> Rc<Cell<usize>> {
    let count = Rc::new(Cell::new(0));
    let observed = Rc::clone(&count);
    transform.subscribe(move || observed.set(observed.get() + 1));
    count
}

fn default_transform() -> ChartTransform {
    ChartTransform::new(ChartTransformConfig::default()).expect("valid config")
}

#[test]
fn setting_current_view_width_does_not_notify() {
    let mut transform = default_transform();
    let count = counting_listener(&mut transform);

    transform.set_view_width(100.0).expect("valid width");
    assert_eq!(count.get(), 0);
}

#[test]
fn changing_view_width_notifies_once_before_returning() {
    let mut transform = default_transform();
    let first = counting_listener(&mut transform);
    let second = counting_listener(&mut transform);

    transform.set_view_width(250.0).expect("valid width");
    assert_eq!(first.get(), 1);
    assert_eq!(second.get(), 1);
}

#[test]
fn every_mutator_suppresses_no_op_updates() {
    let mut transform = default_transform();
    let count = counting_listener(&mut transform);

    transform.set_view_height(100.0).expect("valid height");
    transform.set_view_size(100.0, 100.0).expect("valid size");
    transform.set_model_x_range(Range::SYMMETRIC_UNIT);
    transform.set_model_y_range(Range::new(-1.0, 1.0).expect("valid range"));
    transform.set_model_x_range_inverted(false);
    transform.set_model_y_range_inverted(false);
    transform.set_x_transform(AxisTransform::Identity).expect("valid transform");
    transform.set_y_transform(AxisTransform::Identity).expect("valid transform");

    assert_eq!(count.get(), 0);
}

#[test]
fn every_mutator_notifies_on_change() {
    let mut transform = default_transform();
    let count = counting_listener(&mut transform);

    transform.set_view_height(80.0).expect("valid height");
    transform.set_model_x_range(Range::new(0.0, 5.0).expect("valid range"));
    transform.set_model_y_range(Range::new(0.0, 5.0).expect("valid range"));
    transform.set_model_x_range_inverted(true);
    transform.set_model_y_range_inverted(true);
    transform.set_x_transform(AxisTransform::Log10).expect("valid transform");
    transform
        .set_axis_transform(Orientation::Vertical, AxisTransform::power(2.0).expect("valid"))
        .expect("valid transform");

    assert_eq!(count.get(), 7);
}

#[test]
fn view_size_update_notifies_once_for_both_dimensions() {
    let mut transform = default_transform();
    let count = counting_listener(&mut transform);

    transform.set_view_size(640.0, 480.0).expect("valid size");
    assert_eq!(count.get(), 1);
    assert_eq!(transform.view_width(), 640.0);
    assert_eq!(transform.view_height(), 480.0);
}

#[test]
fn listeners_run_in_subscription_order() {
    let mut transform = default_transform();
    let order = Rc::new(RefCell::new(Vec::new()));
    for label in ["grid", "ticks", "labels"] {
        let order = Rc::clone(&order);
        transform.subscribe(move || order.borrow_mut().push(label));
    }

    transform.set_model_x_range(Range::new(0.0, 2.0).expect("valid range"));
    assert_eq!(*order.borrow(), vec!["grid", "ticks", "labels"]);
}

#[test]
fn unsubscribed_listener_is_not_called() {
    let mut transform = default_transform();
    let count = Rc::new(Cell::new(0));
    let observed = Rc::clone(&count);
    let id = transform.subscribe(move || observed.set(observed.get() + 1));

    assert!(transform.unsubscribe(id));
    assert!(!transform.unsubscribe(id));
    transform.set_view_width(10.0).expect("valid width");

    assert_eq!(count.get(), 0);
    assert_eq!(transform.listener_count(), 0);
}

#[test]
fn failed_mutation_does_not_notify() {
    let mut transform = default_transform();
    let count = counting_listener(&mut transform);

    assert!(transform.set_view_width(-1.0).is_err());
    assert!(
        transform
            .set_x_transform(AxisTransform::Power { exponent: 0.0 })
            .is_err()
    );
    assert_eq!(count.get(), 0);
}

#[test]
fn custom_transform_clone_is_a_no_op_but_new_pair_is_not() {
    let custom = AxisTransform::custom(|x| x * 3.0, |x| x / 3.0);
    let mut transform = ChartTransform::new(
        ChartTransformConfig::default().with_x_transform(custom.clone()),
    )
    .expect("valid config");
    let count = counting_listener(&mut transform);

    transform.set_x_transform(custom).expect("valid transform");
    assert_eq!(count.get(), 0);

    transform
        .set_x_transform(AxisTransform::custom(|x| x * 3.0, |x| x / 3.0))
        .expect("valid transform");
    assert_eq!(count.get(), 1);
}

#[test]
fn watch_goes_dirty_on_change_and_stops_after_unwatch() {
    let mut transform = default_transform();
    let mut watch = transform.watch();
    assert!(watch.take_dirty());

    transform.set_model_y_range_inverted(true);
    assert!(watch.take_dirty());
    assert!(!watch.is_dirty());

    assert!(transform.unwatch(&mut watch));
    transform.set_model_y_range_inverted(false);
    assert!(!watch.is_dirty());
    assert!(!watch.is_attached());
}
