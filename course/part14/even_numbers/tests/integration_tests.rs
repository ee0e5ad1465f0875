use even_numbers::{
    checked_sum_evens, filter_evens,
    input::parse_numbers,
    is_even,
    report::{EvenNumbers, Total},
    sum_evens,
};

fn random_sequences() -> impl Iterator<Item = Vec<i64>> {
    (0..200).map(|_| {
        let len = rand::random::<u8>() as usize;
        (0..len)
            .map(|_| rand::random::<i32>() as i64)
            .collect::<Vec<_>>()
    })
}

#[test]
fn sum_matches_sum_of_filtered() {
    for seq in random_sequences() {
        assert_eq!(
            sum_evens(&seq),
            filter_evens(&seq).iter().sum::<i64>(),
            "sum and filter disagree for {seq:?}"
        );
    }
}

#[test]
fn filter_splits_by_parity() {
    for seq in random_sequences() {
        let evens = filter_evens(&seq);
        assert!(evens.iter().all(|&n| is_even(n)));

        let odd_count = seq.iter().filter(|&&n| !is_even(n)).count();
        assert_eq!(seq.len(), evens.len() + odd_count);
    }
}

#[test]
fn filter_keeps_relative_order() {
    for seq in random_sequences() {
        let evens = filter_evens(&seq);

        let mut remaining = seq.iter();
        for even in &evens {
            assert!(
                remaining.any(|n| n == even),
                "{even} out of order in {seq:?}"
            );
        }
    }
}

#[test]
fn filter_keeps_repeated_evens_in_place() {
    let seq = [2, 1, 2, 4, 2, 3, 4];

    assert_eq!(vec![2, 2, 4, 2, 4], filter_evens(&seq));
    assert_eq!(14, sum_evens(&seq));
}

#[test]
fn filter_is_idempotent() {
    for seq in random_sequences() {
        let once = filter_evens(&seq);
        assert_eq!(once, filter_evens(&once));
    }
}

#[test]
fn checked_sum_agrees_without_overflow() -> anyhow::Result<()> {
    for seq in random_sequences() {
        assert_eq!(sum_evens(&seq), checked_sum_evens(&seq)?);
    }

    Ok(())
}

#[test]
fn lecture_scenario() -> anyhow::Result<()> {
    let numbers = parse_numbers(["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"])?;

    let total = checked_sum_evens(&numbers)?;
    let evens = filter_evens(&numbers);

    assert_eq!("Total: 30", Total(total).to_string());
    assert_eq!("Even numbers: 2 4 6 8 10", EvenNumbers(&evens).to_string());

    Ok(())
}

#[test]
fn negative_scenario() -> anyhow::Result<()> {
    let numbers = parse_numbers(["-4", "-3", "-2", "-1", "0"])?;

    assert_eq!(vec![-4, -2, 0], filter_evens(&numbers));
    assert_eq!(-6, sum_evens(&numbers));

    Ok(())
}
