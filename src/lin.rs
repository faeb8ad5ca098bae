//! Implementation of a basic linear space trait.
//!
//! The main interface is `Lin` with implementations for `f32`/`f64` scalars
//! (one-dimensional problems) and for `ndarray::Array1<F>`.
//!
//! ```rust
//! use fr_cg::Lin;
//! use ndarray::array;
//!
//! let mut x = array![1., 2.];
//! let y = array![2., -3.];
//!
//! assert_eq!(x.dot(&y), -4.);
//! x.ray_to(&y, 2.);
//! assert_eq!(x, array![5., -4.]);
//! ```
use ndarray::{Array1, Zip};
use num_traits::{Float, One, Zero};

/// Trait defining basic operations for an element of a linear space.
///
/// The focus is on operations _in place_: methods that return a `Lin` object
/// modify the object in place.
pub trait Lin {
    /// Scalars for this linear space.
    type F: Float;

    /// Dot product (inner product).
    fn dot(&self, other: &Self) -> Self::F;

    /// Multiplication by a constant.
    fn scale(&mut self, a: Self::F) -> &mut Self;

    /// Adds a vector multiplied by a constant to this vector.
    fn ray_to(&mut self, other: &Self, t: Self::F) -> &mut Self;

    /// Return the origin of the vector space to which self belongs too.
    fn origin(&self) -> Self;

    /// Norm of the vector.
    fn norm(&self) -> Self::F {
        self.norm_squared().sqrt()
    }

    /// Square of the norm.
    fn norm_squared(&self) -> Self::F {
        self.dot(self)
    }

    /// Distance between two vectors.
    fn dist(&self, other: &Self) -> Self::F;

    /// Adds a vector to this vector.
    fn add_mut(&mut self, other: &Self) -> &mut Self {
        self.ray_to(other, Self::F::one())
    }

    /// Creates a linear combination `a * self + b * other`.
    fn combine(&mut self, a: Self::F, other: &Self, b: Self::F) -> &mut Self {
        self.scale(a).ray_to(other, b)
    }
}

impl<F: Float + 'static> Lin for Array1<F> {
    type F = F;

    fn dot(&self, other: &Self) -> F {
        assert_eq!(self.len(), other.len());
        Array1::<F>::dot(self, other)
    }

    fn scale(&mut self, a: F) -> &mut Self {
        self.mapv_inplace(|x| x * a);
        self
    }

    fn ray_to(&mut self, other: &Self, t: F) -> &mut Self {
        assert_eq!(self.len(), other.len());
        self.scaled_add(t, other);
        self
    }

    fn combine(&mut self, a: F, other: &Self, b: F) -> &mut Self {
        assert_eq!(self.len(), other.len());
        Zip::from(&mut *self)
            .and(other)
            .for_each(|x, &y| *x = *x * a + y * b);
        self
    }

    fn origin(&self) -> Self {
        Array1::zeros(self.len())
    }

    fn dist(&self, other: &Self) -> F {
        assert_eq!(self.len(), other.len());
        let diff = self - other;
        Array1::<F>::dot(&diff, &diff).sqrt()
    }
}

// A scalar is an element of a one-dimensional linear space over itself.
macro_rules! impl_lin_scalar {
    ($($t:ty),*) => {$(
        impl Lin for $t {
            type F = $t;

            fn dot(&self, other: &Self) -> $t {
                *self * *other
            }

            fn scale(&mut self, a: $t) -> &mut Self {
                *self *= a;
                self
            }

            fn combine(&mut self, a: $t, other: &Self, b: $t) -> &mut Self {
                *self = *self * a + *other * b;
                self
            }

            fn ray_to(&mut self, other: &Self, t: $t) -> &mut Self {
                *self = *self + *other * t;
                self
            }

            fn origin(&self) -> Self {
                <$t>::zero()
            }

            fn dist(&self, other: &Self) -> $t {
                (*self - *other).abs()
            }

            fn norm(&self) -> $t {
                self.abs()
            }
        }
    )*};
}

impl_lin_scalar!(f32, f64);

#[cfg(test)]
mod test {
    use super::Lin;
    use ndarray::Array1;
    use quickcheck::quickcheck;
    use std::cmp::min;

    // relative error: this shouldn't be to small
    const EPS: f64 = 1e-10;

    fn eps_eq(a: f64, b: f64) -> bool {
        let m = a.abs() + b.abs();
        (a - b).abs() <= EPS * m
    }

    fn trunc(mut v: Vec<f64>, mut w: Vec<f64>) -> (Array1<f64>, Array1<f64>) {
        let l = min(v.len(), w.len());
        v.truncate(l);
        w.truncate(l);
        (Array1::from(v), Array1::from(w))
    }

    #[test]
    fn test_lin_f64() {
        fn prop(a: f64, b: f64, c: f64) -> bool {
            let mut d = a;
            d.ray_to(&b, c);
            eps_eq(a.norm(), a.dist(&a.origin())) && eps_eq(d.dot(&a), a.norm_squared() + c * a * b)
        }

        quickcheck(prop as fn(f64, f64, f64) -> bool);
        let mut a = 1f64;
        a.combine(2., &3., 4.);
        assert_eq!(a.norm(), 1. * 2. + 3. * 4.);
    }

    #[test]
    fn scale_norm_zero() {
        fn prop(v: Vec<f64>) -> bool {
            let mut v = Array1::from(v);
            eps_eq(0., v.scale(0.).norm())
        }
        quickcheck(prop as fn(Vec<f64>) -> bool);
    }

    #[test]
    fn dot_equal_norm_squared() {
        fn prop(v: Vec<f64>) -> bool {
            let v = Array1::from(v);
            eps_eq(Lin::dot(&v, &v), v.norm().powi(2))
        }
        quickcheck(prop as fn(Vec<f64>) -> bool);
    }

    #[test]
    fn origin() {
        fn prop(v: Vec<f64>) -> bool {
            let v = Array1::from(v);
            let o = v.origin();
            eps_eq(o.norm(), 0.) && o.len() == v.len()
        }
        quickcheck(prop as fn(Vec<f64>) -> bool);
    }

    #[test]
    fn dist_norm() {
        fn prop(v: Vec<f64>, w: Vec<f64>) -> bool {
            let (mut v, w) = trunc(v, w);

            let d = v.dist(&w);
            v.ray_to(&w, -1.);

            eps_eq(d, v.norm())
        }
        quickcheck(prop as fn(Vec<f64>, Vec<f64>) -> bool);
    }

    #[test]
    fn combine_ray_to() {
        fn prop(v: Vec<f64>, w: Vec<f64>, a: f64) -> bool {
            let (mut v, w) = trunc(v, w);

            let mut v1 = v.clone();
            v.combine(1., &w, a);
            v1.ray_to(&w, a);

            eps_eq(v.dist(&v1), 0.)
        }
        quickcheck(prop as fn(Vec<f64>, Vec<f64>, f64) -> bool);
    }

    #[test]
    fn add_mut_is_ray_to_one() {
        let mut v = Array1::from(vec![1., -2., 0.5]);
        let w = Array1::from(vec![3., 4., -0.5]);
        v.add_mut(&w);
        assert_eq!(v, Array1::from(vec![4., 2., 0.]));
    }

    #[test]
    #[should_panic]
    fn dimension_mismatch() {
        let v = Array1::from(vec![1., 2.]);
        let w = Array1::from(vec![1., 2., 3.]);
        Lin::dot(&v, &w);
    }
}
