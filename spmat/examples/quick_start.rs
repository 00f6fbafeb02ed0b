//! Parse two matrices from text and print their sum, difference and product

use spmat::{parse_matrix, SparseMatrix, SparseStorage};

const A: &str = "rows=2\ncols=3\n(0,0,1)\n(0,2,2)\n(1,1,3)\n";
const B: &str = "rows=2\ncols=3\n(0,0,-1)\n(1,2,4)\n";
const C: &str = "rows=3\ncols=2\n(0,1,5)\n(2,0,1)\n";

fn main() -> spmat::Result<()> {
    let a: SparseMatrix = parse_matrix(A)?;
    let b: SparseMatrix = parse_matrix(B)?;
    let c: SparseMatrix = parse_matrix(C)?;

    print_result("A + B", &a.add(&b)?);
    print_result("A - B", &a.subtract(&b)?);
    print_result("A * C", &a.multiply(&c)?);

    // Shapes must line up
    if let Err(err) = a.multiply(&b) {
        println!("A * B: {err}");
    }

    Ok(())
}

fn print_result(label: &str, matrix: &SparseMatrix) {
    let (rows, cols) = matrix.dimensions();
    println!("{label} ({rows} x {cols}, {} non-zeros):", matrix.nnz());
    println!("{matrix}\n");
}
