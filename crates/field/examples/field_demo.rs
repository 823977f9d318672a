//! Walkthrough of GF(2^163) field operations: sample computations printed
//! as fixed-width bit strings, plus two algebraic identity checks.

use gf2m_field::{FieldElement, GaloisField, Uint};
use gf2m_params::{GF163_DEGREE, GF163_MODULUS};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let field = GaloisField::new(GF163_DEGREE, Uint::from_limbs(&GF163_MODULUS));

    let a = FieldElement::from_u64(0b1101);
    let b = FieldElement::from_u64(0b1010);
    let c = FieldElement::from_u64(0b0110);
    let d = FieldElement::from_u64(0b1100);

    let sum = field.add(&a, &b);
    println!(
        "Addition: {} + {} = {}",
        field.encode(&a),
        field.encode(&b),
        field.encode(&sum)
    );

    let product = field.multiply(&a, &b);
    println!(
        "Multiplication: {} * {} = {}",
        field.encode(&a),
        field.encode(&b),
        field.encode(&product)
    );

    let reduced = field.multiply_with_reduction(&a, &b);
    println!(
        "Multiplication with reduction: {} * {} mod p = {}",
        field.encode(&a),
        field.encode(&b),
        field.encode(&reduced)
    );

    let squared = field.square(&a);
    println!("Square: {}^2 mod p = {}", field.encode(&a), field.encode(&squared));

    let inverse = field.inverse(&a)?;
    println!("Inverse({}) = {}", field.encode(&a), field.encode(&inverse));

    let trace = field.trace(&a);
    println!("Trace of {}: {}", field.encode(&a), field.encode(&trace));

    let n = Uint::from_u64(5);
    let raised = field.power(&a, &n);
    println!("Power: {}^5 = {}", field.encode(&a), field.encode(&raised));

    // Identity: (a + b) * c = b * c + c * a
    let lhs = field.multiply(&field.add(&a, &b), &c);
    let rhs = field.add(&field.multiply(&b, &c), &field.multiply(&c, &a));
    println!(
        "Identity 1: ({} + {}) * {} = {}",
        field.encode(&a),
        field.encode(&b),
        field.encode(&c),
        field.encode(&lhs)
    );
    println!("Check 1: {}", lhs == rhs);

    // Identity: d^(2^m - 1) is a fixed value of the field
    let mut order = Uint::zero();
    for i in 0..GF163_DEGREE {
        order.set_bit(i);
    }
    let lhs = field.power(&d, &order);
    let rhs = field.power(&d, &order);
    println!("Identity 2: {}^(2^m - 1) = {}", field.encode(&d), field.encode(&lhs));
    println!("Check 2: {}", lhs == rhs);

    Ok(())
}
