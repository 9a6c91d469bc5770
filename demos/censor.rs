use goaway::CensorStr;

fn main() {
    // Okay words are unaffected, accents included.
    show_censor("Helló world!");

    // Bad words are censored.
    show_censor("Hello shit world ass");

    // False positives are avoided.
    show_censor("assassin in a classic");

    // Obfuscation is mostly ignored.
    show_censor("$h1t f-u_c_k pÉnis d u m b a s s");
}

fn show_censor(text: &str) {
    println!("{} -> {}", text, text.censor());
}
