use ferrite_mlp::{
    accuracy, train_network, ActivationFunction, Dataset, Network, Record, TrainConfig, WeightInit,
};

/// Two records, two attributes, two one-hot classes.
fn fixture() -> Dataset {
    Dataset::new(vec![
        Record::new(vec![1.0, 0.0], vec![1.0, 0.0]),
        Record::new(vec![0.0, 1.0], vec![0.0, 1.0]),
    ])
    .unwrap()
}

fn fixture_network(activation: ActivationFunction) -> Network {
    Network::with_activation(
        &fixture(),
        1,
        &[vec![0.5, 0.5, 0.5]],
        &[vec![0.5, 0.5], vec![0.5, 0.5]],
        activation,
    )
    .unwrap()
}

#[test]
fn reference_fixture_identity_activation() {
    // Record 1: hidden 1.0, outputs [1.0, 1.0], delta_out [0.0, 1.0],
    // delta_hid 0.5 for both hidden-layer units.
    // Record 2: hidden 0.95, outputs [0.975, 0.78],
    // delta_out [0.975, -0.22], delta_hid 0.3995.
    let mut net = fixture_network(ActivationFunction::Identity);
    train_network(&mut net, &fixture(), &TrainConfig::new(0.1, 1)).unwrap();

    assert_eq!(net.hidden_weights(), vec![vec![0.45, 0.46005, 0.41005]]);
    assert_eq!(
        net.output_weights(),
        vec![
            vec![0.407375, 0.40249999999999997],
            vec![0.4209, 0.42200000000000004],
        ]
    );
    assert_eq!(net.outputs(), [0.975, 0.78]);
}

#[test]
fn reference_fixture_sigmoid_activation() {
    let mut net = fixture_network(ActivationFunction::Sigmoid);
    train_network(&mut net, &fixture(), &TrainConfig::new(0.1, 1)).unwrap();

    assert_eq!(
        net.hidden_weights(),
        vec![vec![0.4796185414652155, 0.47715255934093287, 0.45677110080614836]]
    );
    assert_eq!(
        net.output_weights(),
        vec![
            vec![0.4698321672331469, 0.4583415075489053],
            vec![0.47178115367396717, 0.46157601526567055],
        ]
    );
}

#[test]
fn training_is_deterministic() {
    let data = ferrite_mlp::data::toy::blobs(40);
    let (hidden, output) = WeightInit::Xavier.network_weights(2, 3, 2, 11);

    let run = || {
        let mut net = Network::new(&data, 3, &hidden, &output).unwrap();
        train_network(&mut net, &data, &TrainConfig::new(0.05, 5)).unwrap();
        (net.hidden_weights(), net.output_weights())
    };

    let (h1, o1) = run();
    let (h2, o2) = run();
    assert_eq!(h1, h2);
    assert_eq!(o1, o2);
    assert_ne!(h1, hidden);
}

#[test]
fn epochs_are_sequential_passes() {
    // Two one-epoch runs equal one two-epoch run.
    let data = fixture();
    let mut twice = fixture_network(ActivationFunction::Sigmoid);
    train_network(&mut twice, &data, &TrainConfig::new(0.1, 1)).unwrap();
    train_network(&mut twice, &data, &TrainConfig::new(0.1, 1)).unwrap();

    let mut once = fixture_network(ActivationFunction::Sigmoid);
    train_network(&mut once, &data, &TrainConfig::new(0.1, 2)).unwrap();

    assert_eq!(twice.hidden_weights(), once.hidden_weights());
    assert_eq!(twice.output_weights(), once.output_weights());
}

#[test]
fn record_order_matters() {
    let forward = fixture();
    let reversed = Dataset::new(forward.records().iter().rev().cloned().collect()).unwrap();

    let mut a = fixture_network(ActivationFunction::Identity);
    train_network(&mut a, &forward, &TrainConfig::new(0.1, 1)).unwrap();
    let mut b = fixture_network(ActivationFunction::Identity);
    train_network(&mut b, &reversed, &TrainConfig::new(0.1, 1)).unwrap();

    assert_ne!(a.output_weights(), b.output_weights());
}

#[test]
fn one_record_epoch_only_moves_edges_with_live_delta_and_source() {
    // ReLU zeroes hidden unit 1 and output 1; output 0 already matches its
    // target. Nothing may move.
    let data = Dataset::new(vec![Record::new(vec![1.0, 3.0], vec![0.5, 1.0])]).unwrap();
    let hidden = vec![vec![0.25, 0.0, 0.25], vec![-1.0, -1.0, 0.0]];
    let output = vec![vec![1.0, 7.0, 0.0], vec![-2.0, 3.0, 0.0]];
    let mut net = Network::with_activation(&data, 2, &hidden, &output, ActivationFunction::ReLU).unwrap();

    train_network(&mut net, &data, &TrainConfig::new(0.3, 1)).unwrap();

    assert_eq!(net.outputs(), [0.5, 0.0]);
    assert_eq!(net.hidden_weights(), hidden);
    assert_eq!(net.output_weights(), output);
}

#[test]
fn xor_training_keeps_predictions_in_range() {
    let data = ferrite_mlp::data::toy::xor();
    let (hidden, output) = WeightInit::default().network_weights(2, 4, 2, 3);
    let mut net = Network::new(&data, 4, &hidden, &output).unwrap();
    train_network(&mut net, &data, &TrainConfig::new(0.5, 200)).unwrap();

    for record in &data {
        assert!(net.evaluate(record).unwrap() < 2);
    }
    let acc = accuracy(&mut net, &data).unwrap();
    assert!((0.0..=1.0).contains(&acc));
}
