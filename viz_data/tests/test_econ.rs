use viz_data::econ::{generate_econ_dataset, EconParams};

#[test]
fn dataset_has_requested_size() {
    let dataset = generate_econ_dataset(&EconParams::default()).unwrap();
    assert_eq!(dataset.len(), 200);
    assert_eq!(dataset.cpi_inflation.len(), 200);
    assert_eq!(dataset.unemployment.len(), 200);
}

#[test]
fn indicators_respect_floors() {
    let dataset = generate_econ_dataset(&EconParams::default()).unwrap();

    for value in &dataset.cpi_inflation {
        assert!(*value >= 0.0);
    }
    for value in &dataset.unemployment {
        assert!(*value >= 2.0);
    }
}

#[test]
fn years_are_monotonic() {
    let dataset = generate_econ_dataset(&EconParams::default()).unwrap();
    for pair in dataset.years.windows(2) {
        assert!(pair[1] > pair[0]);
    }
}

#[test]
fn generation_is_deterministic_for_seed() {
    let a = generate_econ_dataset(&EconParams::default()).unwrap();
    let b = generate_econ_dataset(&EconParams::default()).unwrap();
    assert_eq!(a.cpi_inflation, b.cpi_inflation);
    assert_eq!(a.unemployment, b.unemployment);
}
