//! User-facing messages.

use lookup::LookupResult;

/// Printed when no code was supplied.
pub const MISSING_CEP: &str = "Erro: Você deve fornecer um CEP usando o parâmetro --cep";

/// Printed when no provider answered in time.
pub const TIMEOUT: &str = "Erro: Timeout";

/// Render the winning result: a header naming the provider, then the five
/// address fields, one per line.
pub fn render(result: &LookupResult) -> String {
    let a = &result.address;
    format!(
        "Resultado da API {}:\nCEP: {}\nLogradouro: {}\nBairro: {}\nLocalidade: {}\nUF: {}\n",
        result.provider, a.code, a.street, a.neighborhood, a.city, a.region
    )
}
