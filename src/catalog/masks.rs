//! Ready-made masks for common document, phone, date and money fields.
//!
//! Each function builds a fresh [`Mask`]; the notation each one corresponds
//! to is shown in its doc comment.

use crate::mask::{Mask, MaskSource};
use crate::numeric::{number_mask_source, NumberMaskConfig};

/// Brazilian mobile phone: `(99) 99999-9999`.
pub fn brl_phone() -> Mask {
    Mask::builder()
        .literal('(')
        .digits(2)
        .literals(") ")
        .digits(5)
        .literal('-')
        .digits(4)
        .build()
}

/// Brazilian individual taxpayer id (CPF): `999.999.999-99`.
pub fn brl_cpf() -> Mask {
    Mask::builder()
        .digits(3)
        .literal('.')
        .digits(3)
        .literal('.')
        .digits(3)
        .literal('-')
        .digits(2)
        .build()
}

/// Brazilian company id (CNPJ): `99.999.999/9999-99`.
pub fn brl_cnpj() -> Mask {
    Mask::builder()
        .digits(2)
        .literal('.')
        .digits(3)
        .literal('.')
        .digits(3)
        .literal('/')
        .digits(4)
        .literal('-')
        .digits(2)
        .build()
}

/// Brazilian postal code (CEP): `99999-999`.
pub fn brl_cep() -> Mask {
    Mask::builder().digits(5).literal('-').digits(3).build()
}

/// Brazilian car plate, old and Mercosul layouts: `AAA-9S99`.
pub fn brl_car_plate() -> Mask {
    Mask::builder()
        .letters(3)
        .literal('-')
        .digits(1)
        .alphanumerics(1)
        .digits(2)
        .build()
}

/// Brazilian currency, growing with the value: `R$ 1.234,56`.
pub fn brl_currency() -> MaskSource {
    number_mask_source(NumberMaskConfig::new().prefix("R$ "))
}

/// 16-digit payment card with the middle groups hidden:
/// `9999 [9999] [9999] 9999`.
pub fn credit_card() -> Mask {
    Mask::builder()
        .digits(4)
        .literal(' ')
        .obfuscated_digits(4)
        .literal(' ')
        .obfuscated_digits(4)
        .literal(' ')
        .digits(4)
        .build()
}

/// Day-first date: `99/99/9999`.
pub fn date_ddmmyyyy() -> Mask {
    slashed_date()
}

/// Month-first date: `99/99/9999`.
pub fn date_mmddyyyy() -> Mask {
    slashed_date()
}

/// Year-first date: `9999/99/99`.
pub fn date_yyyymmdd() -> Mask {
    Mask::builder()
        .digits(4)
        .literal('/')
        .digits(2)
        .literal('/')
        .digits(2)
        .build()
}

/// US ZIP code: `99999`.
pub fn zip_code() -> Mask {
    Mask::builder().digits(5).build()
}

/// North American phone: `(999) 999-9999`.
pub fn us_phone() -> Mask {
    Mask::builder()
        .literal('(')
        .digits(3)
        .literals(") ")
        .digits(3)
        .literal('-')
        .digits(4)
        .build()
}

fn slashed_date() -> Mask {
    Mask::builder()
        .digits(2)
        .literal('/')
        .digits(2)
        .literal('/')
        .digits(4)
        .build()
}
