use micrograd_core::autograd::grad_check::check_grad;
use micrograd_core::{add_op, constant, mul_op, pow_op, relu_op, tanh_op, MicrogradError, Value};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

mod common;
use common::init_logger;

/// One step of a randomly generated expression. Indices refer to the pool of
/// nodes built so far (inputs first, then one node per step).
#[derive(Debug, Clone, Copy)]
enum Step {
    Add(usize, usize),
    Mul(usize, usize),
    Pow(usize, i32),
    Tanh(usize),
}

fn random_recipe(rng: &mut StdRng, num_inputs: usize, num_steps: usize) -> Vec<Step> {
    let mut recipe = Vec::with_capacity(num_steps);
    for step in 0..num_steps {
        let pool_len = num_inputs + step;
        let i = rng.gen_range(0..pool_len);
        let j = rng.gen_range(0..pool_len);
        recipe.push(match rng.gen_range(0..4) {
            0 => Step::Add(i, j),
            1 => Step::Mul(i, j),
            2 => Step::Pow(i, rng.gen_range(2..=3)),
            _ => Step::Tanh(i),
        });
    }
    recipe
}

fn evaluate(recipe: &[Step], leaves: &[Value]) -> Result<Value, MicrogradError> {
    let mut pool: Vec<Value> = leaves.to_vec();
    for step in recipe {
        let node = match *step {
            Step::Add(i, j) => add_op(&pool[i], &pool[j]),
            Step::Mul(i, j) => mul_op(&pool[i], &pool[j]),
            Step::Pow(i, e) => pow_op(&pool[i], e as f64)?,
            Step::Tanh(i) => tanh_op(&pool[i]),
        };
        pool.push(node);
    }
    // Sum every node so that all of them feed the root
    let mut total = constant(0.0);
    for node in &pool[leaves.len()..] {
        total = add_op(&total, node);
    }
    Ok(tanh_op(&total))
}

#[test]
fn test_random_graphs_match_finite_differences() {
    init_logger();
    for seed in 0..25u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let num_inputs = rng.gen_range(1..=4);
        let inputs: Vec<f64> = (0..num_inputs).map(|_| rng.gen_range(-1.0..1.0)).collect();
        let recipe = random_recipe(&mut rng, num_inputs, 8);

        let result = check_grad(|leaves: &[Value]| evaluate(&recipe, leaves), &inputs, 1e-6, 1e-4);
        assert!(
            result.is_ok(),
            "seed {} recipe {:?} inputs {:?}: {:?}",
            seed,
            recipe,
            inputs,
            result.err()
        );
    }
}

#[test]
fn test_relu_graph_away_from_kink() {
    // relu(x*y - 0.5) + relu(tanh(x) + 2) with inputs keeping both pre-activations
    // at least 0.1 away from zero.
    let func = |v: &[Value]| -> Result<Value, MicrogradError> {
        let first = relu_op(&(&mul_op(&v[0], &v[1]) - 0.5));
        let second = relu_op(&(tanh_op(&v[0]) + 2.0));
        Ok(add_op(&first, &second))
    };
    for inputs in [[1.0, 1.0], [0.2, 0.3], [-1.5, -2.0], [2.0, -0.7]] {
        let result = check_grad(func, &inputs, 1e-6, 1e-4);
        assert!(result.is_ok(), "inputs {:?}: {:?}", inputs, result.err());
    }
}

#[test]
fn test_random_operator_values() -> Result<(), MicrogradError> {
    let mut rng = StdRng::seed_from_u64(1234);
    for _ in 0..100 {
        let a = constant(rng.gen_range(-10.0..10.0));
        let b = constant(rng.gen_range(-10.0..10.0));
        assert_eq!(add_op(&a, &b).data(), a.data() + b.data());
        assert_eq!(mul_op(&a, &b).data(), a.data() * b.data());
        assert_eq!(pow_op(&a, 2.0)?.data(), a.data().powf(2.0));
        assert_eq!(tanh_op(&a).data(), a.data().tanh());
        assert_eq!(relu_op(&a).data(), a.data().max(0.0));
    }
    Ok(())
}
