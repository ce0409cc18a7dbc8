use super::space::Space;

/// R^n as `Vec<f64>`; the extent is taken from the starting point.
#[derive(Clone, Copy, Debug, Default)]
pub struct EuclideanSpace;

impl Space for EuclideanSpace {
    type Point = Vec<f64>;

    fn zero_like(&self, x: &Vec<f64>) -> Vec<f64> {
        vec![0.0; x.len()]
    }

    fn as_slice(v: &Vec<f64>) -> &[f64] {
        v.as_slice()
    }

    fn as_mut_slice(v: &mut Vec<f64>) -> &mut [f64] {
        v.as_mut_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_matches_hand_computation() {
        let space = EuclideanSpace;
        let x = vec![1.0, -2.0, 3.0];
        let p = vec![0.5, 0.5, -1.0];

        assert_eq!(space.dot(&x, &p), 0.5 - 1.0 - 3.0);
        assert_eq!(space.norm_inf(&x), 3.0);
        assert_eq!(space.axpy(&x, 2.0, &p), vec![2.0, -1.0, 1.0]);
        assert_eq!(space.difference(&p, &x), vec![0.5, -2.5, 4.0]);
        assert_eq!(space.scale(&p, -2.0), vec![-1.0, -1.0, 2.0]);
    }

    #[test]
    fn in_place_updates() {
        let space = EuclideanSpace;
        let mut x = vec![1.0, 1.0];
        space.axpy_in_place(&mut x, -0.5, &vec![2.0, 4.0]);
        assert_eq!(x, vec![0.0, -1.0]);
        space.scale_in_place(&mut x, 3.0);
        assert_eq!(x, vec![0.0, -3.0]);
    }

    #[test]
    fn norm_inf_of_empty_vector_is_zero() {
        assert_eq!(EuclideanSpace.norm_inf(&Vec::new()), 0.0);
    }
}
