use ampliverse::symmetries::{bisection_swap, inverted_nybbles};
use ampliverse::{generate_symmetries, SwapSymmetries};
use proptest::prelude::*;

#[test]
fn lowest_bit_orbit() {
    let mut tracker = SwapSymmetries::new();
    assert_eq!(tracker.is_symmetry_or_should_multiply_amplitude(0b1), 4);

    let orbit = generate_symmetries(0b1);
    assert_eq!(orbit.len(), 4);
    for member in [0b1u64, 0b1000, 0b10_0000, 0b100_0000] {
        assert!(orbit.contains(&member), "missing {member:#b}");
        assert_eq!(tracker.is_symmetry_or_should_multiply_amplitude(member), 0);
    }
}

#[test]
fn fixed_points_have_singleton_orbits() {
    // each 0x69 byte holds two nybble palindromes that the bisection swap
    // exchanges into each other
    assert_eq!(generate_symmetries(0), vec![0]);
    let palindrome = 0x6969_6969_6969_6969;
    assert_eq!(bisection_swap(palindrome), palindrome);
    assert_eq!(inverted_nybbles(palindrome), palindrome);
    assert_eq!(generate_symmetries(palindrome), vec![palindrome]);
}

proptest! {
    #[test]
    fn permutations_are_involutions(bitstring in any::<u64>()) {
        prop_assert_eq!(inverted_nybbles(inverted_nybbles(bitstring)), bitstring);
        prop_assert_eq!(bisection_swap(bisection_swap(bitstring)), bitstring);
    }

    #[test]
    fn permutations_commute(bitstring in any::<u64>()) {
        prop_assert_eq!(
            inverted_nybbles(bisection_swap(bitstring)),
            bisection_swap(inverted_nybbles(bitstring))
        );
    }

    #[test]
    fn orbits_are_closed(bitstring in any::<u64>()) {
        let orbit = generate_symmetries(bitstring);
        prop_assert!(matches!(orbit.len(), 1 | 2 | 4));
        for &member in &orbit {
            prop_assert!(orbit.contains(&inverted_nybbles(member)));
            prop_assert!(orbit.contains(&bisection_swap(member)));
        }
    }

    #[test]
    fn every_orbit_member_reports_the_same_orbit(bitstring in any::<u64>()) {
        for &member in &generate_symmetries(bitstring) {
            let mut member_orbit = generate_symmetries(member);
            let mut orbit = generate_symmetries(bitstring);
            member_orbit.sort_unstable();
            orbit.sort_unstable();
            prop_assert_eq!(member_orbit, orbit);
        }
    }

    #[test]
    fn reinsertion_returns_zero(bitstring in any::<u64>()) {
        let mut tracker = SwapSymmetries::new();
        let first = tracker.is_symmetry_or_should_multiply_amplitude(bitstring);
        prop_assert_eq!(first as usize, generate_symmetries(bitstring).len());
        for &member in &generate_symmetries(bitstring) {
            prop_assert_eq!(tracker.is_symmetry_or_should_multiply_amplitude(member), 0);
        }
    }
}
