extern crate bencher;

use ffx_a2::{Encrypter, Numeral};

fn context(b: &mut bencher::Bencher) {
    b.iter(|| Encrypter::new(&[0; 16], 10).unwrap());
}

fn encrypt(b: &mut bencher::Bencher) {
    let enc = Encrypter::new(&[0; 16], 10).unwrap();
    let pt = Numeral::from_str("0123456789", 10, 10).unwrap();
    b.iter(|| enc.encrypt(None, &pt));
}

fn decrypt(b: &mut bencher::Bencher) {
    let enc = Encrypter::new(&[0; 16], 10).unwrap();
    let pt = Numeral::from_str("0123456789", 10, 10).unwrap();
    let ct = enc.encrypt(None, &pt).unwrap();
    b.iter(|| enc.decrypt(None, &ct));
}

bencher::benchmark_group!(benches, context, encrypt, decrypt);
bencher::benchmark_main!(benches);
