use dualmat::{
    DoubleMatrix, DoubleSparseMatrix, RealStore, add_sparse, determinant, determinant_sparse,
    identity, multiply,
};
use rand::Rng;

fn main() -> Result<(), dualmat::MatError> {
    let n = 5;
    // random diagonally dominant matrix, about half of the off-diagonal zero
    let mut rng = rand::thread_rng();
    let mut a = DoubleMatrix::new(n, n)?;
    for i in 0..n {
        for j in 0..n {
            if i == j {
                a.set_value(i, j, n as f64 + rng.r#gen::<f64>())?;
            } else if rng.gen_bool(0.5) {
                a.set_value(i, j, rng.gen_range(-1.0..1.0))?;
            }
        }
    }
    let s: DoubleSparseMatrix = a.to_sparse();
    println!("A =\n{a}");
    println!("stored entries in sparse copy: {} of {}", s.stored_len(), n * n);

    println!("det(A) dense  = {}", determinant(&a)?);
    println!("det(A) sparse = {}", determinant_sparse(&s)?);

    let twice = add_sparse(&a, &s)?;
    println!("A + A =\n{twice}");

    let same = multiply(&identity::<f64>(n)?, &a)?;
    println!("I * A == A: {}", same == a);

    let parsed = DoubleMatrix::from_text(2, 2, "1 2 3", r"\s")?;
    println!("parsed =\n{parsed}");
    Ok(())
}
