//! Legendre polynomial evaluation.
//!
//! Legendre polynomials P_n(x) are orthogonal on [-1, 1] with weight 1:
//! ∫_{-1}^{1} P_m(x) P_n(x) dx = 2/(2n+1) δ_{mn}
//!
//! The modal basis used by the solver is the *scaled* family
//! φ_n(x) = sqrt(2n+1) P_n(x), normalized so that
//! ∫_{-1}^{1} φ_m φ_n dx = 2 δ_{mn}.

/// Evaluate Legendre polynomial P_n(x) using three-term recurrence.
///
/// The recurrence relation is:
/// P_0(x) = 1
/// P_1(x) = x
/// (n+1) P_{n+1}(x) = (2n+1) x P_n(x) - n P_{n-1}(x)
pub fn legendre(n: usize, x: f64) -> f64 {
    if n == 0 {
        return 1.0;
    }
    if n == 1 {
        return x;
    }

    let mut p_prev = 1.0; // P_{n-2}
    let mut p_curr = x; // P_{n-1}

    for k in 1..n {
        let p_next = ((2 * k + 1) as f64 * x * p_curr - k as f64 * p_prev) / (k + 1) as f64;
        p_prev = p_curr;
        p_curr = p_next;
    }

    p_curr
}

/// Evaluate derivative of Legendre polynomial P'_n(x).
///
/// Uses the relation:
/// P'_n(x) = n (x P_n(x) - P_{n-1}(x)) / (x^2 - 1)  for |x| != 1
/// P'_n(1) = n(n+1)/2
/// P'_n(-1) = (-1)^{n+1} n(n+1)/2
pub fn legendre_derivative(n: usize, x: f64) -> f64 {
    if n == 0 {
        return 0.0;
    }

    // Handle boundary cases where x^2 - 1 = 0
    if (x - 1.0).abs() < 1e-14 {
        return (n * (n + 1)) as f64 / 2.0;
    }
    if (x + 1.0).abs() < 1e-14 {
        let sign = if n % 2 == 0 { -1.0 } else { 1.0 };
        return sign * (n * (n + 1)) as f64 / 2.0;
    }

    let p_n = legendre(n, x);
    let p_n_minus_1 = legendre(n - 1, x);

    n as f64 * (x * p_n - p_n_minus_1) / (x * x - 1.0)
}

/// Evaluate the scaled Legendre basis function φ_n(x) = sqrt(2n+1) P_n(x).
pub fn scaled_legendre(n: usize, x: f64) -> f64 {
    ((2 * n + 1) as f64).sqrt() * legendre(n, x)
}

/// Evaluate the derivative of the scaled basis function φ'_n(x).
pub fn scaled_legendre_derivative(n: usize, x: f64) -> f64 {
    ((2 * n + 1) as f64).sqrt() * legendre_derivative(n, x)
}
