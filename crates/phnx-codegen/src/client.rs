//! `client.ts` emitter.
//!
//! Emits a dependency-free fetch client: one method per operation, a
//! config object holding base URL, default headers, and an injectable
//! fetch implementation. Path parameter values are percent-encoded when
//! substituted, so reserved URL characters in values cannot break the
//! request path.

use crate::document::{Document, Operation};
use crate::names::{method_name, replace_path_params};

const PRELUDE: &str = r#"// Generated fetch client (minimal).
// This file is dependency-free; adapt to Axios/TanStack Query if desired.

export type HttpMethod = "GET" | "POST" | "PUT" | "PATCH" | "DELETE";

export interface ClientConfig {
  baseUrl?: string;
  headers?: Record<string, string>;
  fetch?: typeof fetch;
}

export class PhnxClient {
  private baseUrl: string;
  private headers: Record<string, string>;
  private fetchImpl: typeof fetch;

  constructor(config: ClientConfig = {}) {
    this.baseUrl = config.baseUrl ?? "";
    this.headers = config.headers ?? {};
    this.fetchImpl = config.fetch ?? fetch;
  }

  private async request<TResponse>(method: HttpMethod, path: string, init?: RequestInit): Promise<TResponse> {
    const url = this.baseUrl ? new URL(path, this.baseUrl).toString() : path;
    const res = await this.fetchImpl(url, {
      ...init,
      method,
      headers: {
        ...this.headers,
        ...(init?.headers ?? {}),
      },
    });

    if (!res.ok) {
      const text = await res.text().catch(() => "");
      throw new Error(`HTTP ${res.status} ${res.statusText}${text ? `: ${text}` : ""}`);
    }

    const contentType = res.headers.get("content-type") ?? "";
    if (contentType.includes("application/json")) {
      return (await res.json()) as TResponse;
    }
    return (await res.text()) as unknown as TResponse;
  }

"#;

const FOOTER: &str = r#"}

export function createClient(config: ClientConfig = {}) {
  return new PhnxClient(config);
}
"#;

/// Emit the fetch client file.
pub fn emit(doc: &Document) -> String {
    let mut out = String::from(PRELUDE);
    for op in &doc.operations {
        push_method(&mut out, op);
    }
    out.push_str(FOOTER);
    out
}

fn push_method(out: &mut String, op: &Operation) {
    let name = method_name(op);
    let path_template = replace_path_params(&op.path, |param| {
        format!("${{encodeURIComponent(String(pathParams[\"{param}\"] ?? \"\"))}}")
    });

    out.push_str(&format!("  /** {} {}{} */\n", op.method, op.path, params_note(op)));
    out.push_str(&format!("  async {name}<TResponse = unknown>(params?: {{\n"));
    out.push_str("    path?: Record<string, string | number>;\n");
    out.push_str("    query?: Record<string, string | number | boolean | undefined>;\n");
    out.push_str("    body?: unknown;\n");
    out.push_str("    headers?: Record<string, string>;\n");
    out.push_str("  }): Promise<TResponse> {\n");
    out.push_str("    const pathParams = params?.path ?? {};\n");
    out.push_str(&format!("    const path = `{path_template}`;\n"));
    out.push_str("\n");
    out.push_str("    const query = params?.query ?? {};\n");
    out.push_str("    const qs = new URLSearchParams();\n");
    out.push_str("    for (const [k, v] of Object.entries(query)) {\n");
    out.push_str("      if (v === undefined) continue;\n");
    out.push_str("      qs.set(k, String(v));\n");
    out.push_str("    }\n");
    out.push_str("    const url = qs.size ? `${path}?${qs.toString()}` : path;\n");
    out.push_str("\n");
    out.push_str("    const body = params?.body;\n");
    out.push_str("    const headers: Record<string, string> = {\n");
    out.push_str("      ...(params?.headers ?? {}),\n");
    out.push_str("    };\n");
    out.push_str("\n");
    out.push_str("    const init: RequestInit = { headers };\n");
    out.push_str("    if (body !== undefined) {\n");
    out.push_str("      init.body = JSON.stringify(body);\n");
    out.push_str("      headers[\"content-type\"] = headers[\"content-type\"] ?? \"application/json\";\n");
    out.push_str("    }\n");
    out.push_str("\n");
    out.push_str(&format!(
        "    return this.request<TResponse>(\"{}\", url, init);\n",
        op.method
    ));
    out.push_str("  }\n\n");
}

/// Declared parameters, summarized in the method doc comment.
fn params_note(op: &Operation) -> String {
    if op.parameters.is_empty() {
        return String::new();
    }
    let list: Vec<String> = op
        .parameters
        .iter()
        .map(|p| format!("{} ({})", p.name, p.location))
        .collect();
    format!(" (params: {})", list.join(", "))
}
