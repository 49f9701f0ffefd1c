//! Captured registrations from real authenticators, base64url without padding.

/// Apple format registration, anonymous leaf plus intermediate.
pub const APPLE_ATTESTATION_OBJECT: &str = concat!(
    "o2NmbXRlYXBwbGVnYXR0U3RtdKJjYWxnJmN4NWOCWQJIMIICRDCCAcmgAwIBAgIGAXUCfWGDMAoGCCqGSM49BAMCMEgxHDAa",
    "BgNVBAMME0FwcGxlIFdlYkF1dGhuIENBIDExEzARBgNVBAoMCkFwcGxlIEluYy4xEzARBgNVBAgMCkNhbGlmb3JuaWEwHhcN",
    "MjAxMDA3MDk0NjEyWhcNMjAxMDA4MDk1NjEyWjCBkTFJMEcGA1UEAwxANjEyNzZmYzAyZDNmZThkMTZiMzNiNTU0OWQ4MTky",
    "MzZjODE3NDZhODNmMmU5NGE2ZTRiZWUxYzcwZjgxYjViYzEaMBgGA1UECwwRQUFBIENlcnRpZmljYXRpb24xEzARBgNVBAoM",
    "CkFwcGxlIEluYy4xEzARBgNVBAgMCkNhbGlmb3JuaWEwWTATBgcqhkjOPQIBBggqhkjOPQMBBwNCAAR5_lkIu1EpyAk4t1TA",
    "TSs0DvpmFbmHaYv1naTlPqPm_vsD2qEnDVgE6KthwVqsokNcfb82nXHKFcUjsABKG3W3o1UwUzAMBgNVHRMBAf8EAjAAMA4G",
    "A1UdDwEB_wQEAwIE8DAzBgkqhkiG92NkCAIEJjAkoSIEIJxgAhVAs-GYNN_jfsYkRcieGylPeSzka5QTwyMO84aBMAoGCCqG",
    "SM49BAMCA2kAMGYCMQDaHBjrI75xAF7SXzyF5zSQB_Lg9PjTdyye-w7stiqy84K6lmo8d3fIptYjLQx81bsCMQCvC8MSN-ae",
    "wiaU0bMsdxRbdDerCJJj3xJb3KZwloevJ3daCmCcrZrAPYfLp2kDOshZAjgwggI0MIIBuqADAgECAhBWJVOVx6f7QOviKNgm",
    "CFO2MAoGCCqGSM49BAMDMEsxHzAdBgNVBAMMFkFwcGxlIFdlYkF1dGhuIFJvb3QgQ0ExEzARBgNVBAoMCkFwcGxlIEluYy4x",
    "EzARBgNVBAgMCkNhbGlmb3JuaWEwHhcNMjAwMzE4MTgzODAxWhcNMzAwMzEzMDAwMDAwWjBIMRwwGgYDVQQDDBNBcHBsZSBX",
    "ZWJBdXRobiBDQSAxMRMwEQYDVQQKDApBcHBsZSBJbmMuMRMwEQYDVQQIDApDYWxpZm9ybmlhMHYwEAYHKoZIzj0CAQYFK4EE",
    "ACIDYgAEgy6HLyYUkYECJbn1_Na7Y3i19V8_ywRbxzWZNHX9VJBE35v-GSEXZcaaHdoFCzjUUINAGkNPsk0RLVbD4c-_y5iR",
    "_sBpYIG--Wy8d8iN3a9Gpa7h3VFbWvqrk76cCyaRo2YwZDASBgNVHRMBAf8ECDAGAQH_AgEAMB8GA1UdIwQYMBaAFCbXZNnF",
    "eMJaZ9Gn3msS0Btj8cbXMB0GA1UdDgQWBBTrroLE_6GsW1HUzyRhBQC-Y713iDAOBgNVHQ8BAf8EBAMCAQYwCgYIKoZIzj0E",
    "AwMDaAAwZQIxAN2LGjSBpfrZ27TnZXuEHhRMJ7dbh2pBhsKxR1dQM3In7-VURX72SJUMYy5cSD5wwQIwLIpgRNwgH8_lm8NN",
    "KTDBSHhR2WDtanXx60rKvjjNJbiX0MgFvvDH94sHpXHG6A4HaGF1dGhEYXRhWJhWHo8_bWPQzAMKYRIrGXu__PkMUfuqHM4R",
    "H7Jea4WDgkUAAAAAAAAAAAAAAAAAAAAAAAAAAAAUomGfdaNI-cYgWrq2klNk97zkcg-lAQIDJiABIVggef5ZCLtRKcgJOLdU",
    "wE0rNA76ZhW5h2mL9Z2k5T6j5v4iWCD7A9qhJw1YBOirYcFarKJDXH2_Np1xyhXFI7AASht1tw",
);

pub const APPLE_CLIENT_DATA: &str = concat!(
    "eyJ0eXBlIjoid2ViYXV0aG4uY3JlYXRlIiwiY2hhbGxlbmdlIjoia093TXZFMm1RTzZvdTBCMGpqRDBWQSIsIm9yaWdpbiI6",
    "Imh0dHBzOi8vNmNjM2M5ZTc5NjdhLm5ncm9rLmlvIn0",
);

/// Fido-u2f registration from a Yubikey, leaf only.
pub const U2F_ATTESTATION_OBJECT: &str = concat!(
    "o2NmbXRoZmlkby11MmZnYXR0U3RtdKJjc2lnWEcwRQIgRMxowC__Z-mgVR6netL6C7Q15weqiTCPwwq1EaeJVqMCIQCHb9cC",
    "ad1VloGhQ60mw7KTJhkx61mfgKKwHUVZf1wR6mN4NWOBWQLCMIICvjCCAaagAwIBAgIEdIb9wjANBgkqhkiG9w0BAQsFADAu",
    "MSwwKgYDVQQDEyNZdWJpY28gVTJGIFJvb3QgQ0EgU2VyaWFsIDQ1NzIwMDYzMTAgFw0xNDA4MDEwMDAwMDBaGA8yMDUwMDkw",
    "NDAwMDAwMFowbzELMAkGA1UEBhMCU0UxEjAQBgNVBAoMCVl1YmljbyBBQjEiMCAGA1UECwwZQXV0aGVudGljYXRvciBBdHRl",
    "c3RhdGlvbjEoMCYGA1UEAwwfWXViaWNvIFUyRiBFRSBTZXJpYWwgMTk1NTAwMzg0MjBZMBMGByqGSM49AgEGCCqGSM49AwEH",
    "A0IABJVd8633JH0xde_9nMTzGk6HjrrhgQlWYVD7OIsuX2Unv1dAmqWBpQ0KxS8YRFwKE1SKE1PIpOWacE5SO8BN6-2jbDBq",
    "MCIGCSsGAQQBgsQKAgQVMS4zLjYuMS40LjEuNDE0ODIuMS4xMBMGCysGAQQBguUcAgEBBAQDAgUgMCEGCysGAQQBguUcAQEE",
    "BBIEEPigEfOMCk0VgAYXER-e3H0wDAYDVR0TAQH_BAIwADANBgkqhkiG9w0BAQsFAAOCAQEAMVxIgOaaUn44Zom9af0KqG9J",
    "655OhUVBVW-q0As6AIod3AH5bHb2aDYakeIyyBCnnGMHTJtuekbrHbXYXERIn4aKdkPSKlyGLsA_A-WEi-OAfXrNVfjhrh7i",
    "E6xzq0sg4_vVJoywe4eAJx0fS-Dl3axzTTpYl71Nc7p_NX6iCMmdik0pAuYJegBcTckE3AoYEg4K99AM_JaaKIblsbFh8-3L",
    "xnemeNf7UwOczaGGvjS6UzGVI0Odf9lKcPIwYhuTxM5CaNMXTZQ7xq4_yTfC3kPWtE4hFT34UJJflZBiLrxG4OsYxkHw_n5v",
    "KgmpspB3GfYuYTWhkDKiE8CYtyg87mhhdXRoRGF0YVjESZYN5YgOjGh0NBcPZHZgW4_krrmihjLHmVzzuoMdl2NBAAAAAAAA",
    "AAAAAAAAAAAAAAAAAAAAQO5ybLba-HS0rJq1p2hwd3rKSdLmva7CdsLPvdwRXDTj-uIP7P-MCxQ75JazWHINAQjenXVIyS8Q",
    "3w0ga3ikCwOlAQIDJiABIVggUOAo5xqsJoPfJWsU50h7c2S7_llP0KwGI6vJkEj1N48iWCA2TMSeBfhJ84HyMQQgjJvBiA6J",
    "nHA0chxSlmuZeT9Xgg",
);

pub const U2F_CLIENT_DATA: &str = concat!(
    "eyJjaGFsbGVuZ2UiOiJhTDJ1d0FwZ3d1bUJ6VFlDY29MMF80RFJ2X21mWXlremdxSkJGb0pqX1dDS05aT3B2VVFueWpkd01X",
    "SVdLY1k4NDR0eUROTE81cFFQQk1KckhQel8zZyIsImNsaWVudEV4dGVuc2lvbnMiOnt9LCJoYXNoQWxnb3JpdGhtIjoiU0hB",
    "LTI1NiIsIm9yaWdpbiI6Imh0dHBzOi8vbG9jYWxob3N0OjQ0MzI5IiwidHlwZSI6IndlYmF1dGhuLmNyZWF0ZSJ9",
);

/// Packed x5c registration from a Yubikey 5, with credProtect.
pub const YUBIKEY_PACKED_ATTESTATION_OBJECT: &str = concat!(
    "o2NmbXRmcGFja2VkZ2F0dFN0bXSjY2FsZyZjc2lnWEYwRAIgZEq9euYGkqTP4VMBs-5fruhwAPSyKjOlr2THNZGvZ3gCIHww",
    "2gAgZXvZcIwcSiUF3fHhaNL0uj8V5rOLHyGRJz81Y3g1Y4FZAsEwggK9MIIBpaADAgECAgQej4c0MA0GCSqGSIb3DQEBCwUA",
    "MC4xLDAqBgNVBAMTI1l1YmljbyBVMkYgUm9vdCBDQSBTZXJpYWwgNDU3MjAwNjMxMCAXDTE0MDgwMTAwMDAwMFoYDzIwNTAw",
    "OTA0MDAwMDAwWjBuMQswCQYDVQQGEwJTRTESMBAGA1UECgwJWXViaWNvIEFCMSIwIAYDVQQLDBlBdXRoZW50aWNhdG9yIEF0",
    "dGVzdGF0aW9uMScwJQYDVQQDDB5ZdWJpY28gVTJGIEVFIFNlcmlhbCA1MTI3MjI3NDAwWTATBgcqhkjOPQIBBggqhkjOPQMB",
    "BwNCAASoefgjOO0UlLrAcEvMf8Zj0bJxcVl2JDEBx2BRFdfBUp4oHBxnMi04S1zVXdPpgY1f2FwirzJuDGT8IK_jPyNmo2ww",
    "ajAiBgkrBgEEAYLECgIEFTEuMy42LjEuNC4xLjQxNDgyLjEuNzATBgsrBgEEAYLlHAIBAQQEAwIEMDAhBgsrBgEEAYLlHAEB",
    "BAQSBBAvwFefgRNH6rEWu1qNuSAqMAwGA1UdEwEB_wQCMAAwDQYJKoZIhvcNAQELBQADggEBAIaT_2LfDVd51HSNf8jRAicx",
    "io5YDmo6V8EI6U4Dw4Vos2aJT85WJL5KPv1_NBGLPZk3Q_eSoZiRYMj8muCwTj357hXj6IwE_IKo3L9YGOEI3MKWhXeuef9m",
    "K5RzTj3sRZcwXXPm5V7ivrnNlnjKCTXlM-tjj44m-ruBfNpEH76YMYMq5fbirZkvnrvbTGIji4-NerSB1tMmO82_nkpXVQNw",
    "mIrVgTRA-gMsrbZyPK3Y-Ne6gJ91tDz_oKW5rdFCMu-dnhSBJjgjPEykqHO5-KyY4yuhkWdgbhWQn83bSi3_va5GICSfmmZG",
    "rIHkgy0RGf6_qnMaiC2iWneCfUbRkBdoYXV0aERhdGFY0kmWDeWIDoxodDQXD2R2YFuP5K65ooYyx5lc87qDHZdjxQAAAAEv",
    "wFefgRNH6rEWu1qNuSAqAED0onKVpSBWhYXZwXapflqftm08EV5ExfL6MxIaA1YKiDGLJy1UW0hwMqaRWZ8o6CWV98okzKXi",
    "AV4ObwpqW2sPpQECAyYgASFYIB_nQH-kBm4OmDfqezjFDr_t0Psz6JrylkEPWHFs2UB-Ilgg7xkwKc-IHHIwPI8EJ5ycM1zv",
    "WDnm4bCarn1LAWAU3Dqha2NyZWRQcm90ZWN0Aw",
);

pub const YUBIKEY_PACKED_CLIENT_DATA: &str = concat!(
    "eyJ0eXBlIjoid2ViYXV0aG4uY3JlYXRlIiwiY2hhbGxlbmdlIjoiZlhmQ1EtTVdtSWJjajB0M3hhVnpsYnVaMHpQWGdPRTRi",
    "bEEwNjVXU1pjbyIsIm9yaWdpbiI6Imh0dHA6Ly9sb2NhbGhvc3Q6ODA4MCIsImNyb3NzT3JpZ2luIjpmYWxzZSwib3RoZXJf",
    "a2V5c19jYW5fYmVfYWRkZWRfaGVyZSI6ImRvIG5vdCBjb21wYXJlIGNsaWVudERhdGFKU09OIGFnYWluc3QgYSB0ZW1wbGF0",
    "ZS4gU2VlIGh0dHBzOi8vZ29vLmdsL3lhYlBleCJ9",
);

/// Packed self attestation from macOS Touch ID (Chrome).
pub const TOUCHID_PACKED_SELF_ATTESTATION_OBJECT: &str = concat!(
    "o2NmbXRmcGFja2VkZ2F0dFN0bXSiY2FsZyZjc2lnWEcwRQIgLXPjBtVEhBH3KdUDFFk3LAd9EtHogllIf48vjX4wgfECIQCX",
    "Oymmfg12FPMXEdwpSjjtmrvki4K8y0uYxqWN5Bw6DGhhdXRoRGF0YViuSZYN5YgOjGh0NBcPZHZgW4_krrmihjLHmVzzuoMd",
    "l2NFXaqejq3OAAI1vMYKZIsLJfHwVQMAKgE5P-0Cm4v57Unadei13lOkQ3_WJ0SyA0wqhIyRc3OqygYW6qEmHHMTWqUBAgMm",
    "IAEhWCDNRS_Gw52ow5PNrC9OdFTFNudDmZO6Y3wmM9N8e0tJICJYIC09iIH5_RrT5tbS0PIw3srdAxYDMGao7yWgu0JFIEzT",
);

pub const TOUCHID_PACKED_SELF_CLIENT_DATA: &str = concat!(
    "eyJjaGFsbGVuZ2UiOiJsUDZtV05BdEctX1Z2MTVpTTdsYl9YUmtkV012VlEtbFR5S3dadU9nMVZvIiwiZXh0cmFfa2V5c19t",
    "YXlfYmVfYWRkZWRfaGVyZSI6ImRvIG5vdCBjb21wYXJlIGNsaWVudERhdGFKU09OIGFnYWluc3QgYSB0ZW1wbGF0ZS4gU2Vl",
    "IGh0dHBzOi8vZ29vLmdsL3lhYlBleCIsIm9yaWdpbiI6Imh0dHBzOi8vbG9jYWxob3N0Ojg0NDMiLCJ0eXBlIjoid2ViYXV0",
    "aG4uY3JlYXRlIn0",
);

/// Tpm registration from Windows Hello, RS1 AIK signature.
pub const WINDOWS_HELLO_TPM_ATTESTATION_OBJECT: &str = concat!(
    "o2NmbXRjdHBtZ2F0dFN0bXSmY2FsZzn__mNzaWdZAQAFA6LYlznSZ5F5obo_6N3_WSURO5vxTR4jyR6MVNb6uS_4Olmxu-fK",
    "3C2nfvPCXiEnzaMzKKsjdsT094-mwd9e9J153BZeow-X39aDacooELALmmZk1K5nplxamuAUpWp_NVvm2cesw8vyKZ5A_EEJ",
    "m6A_KF5eQJGtR1WtAscSlFjfXZrLxaqOI_mSa5ICDjYnl7UKsNh1GcQCzZ-MmzhZVx-HXWFOX7DkSO2CqxdC6CNz2mmoBv15",
    "oYEsTvwsCxesQiXWcYAcIdFCIiDEmVBX86IHGT78864fqGJ7ZAKPhiSa7BKAr7m9sTM12L4rPyNUDkD5Fwl9k6CwiR6u9ZS9",
    "Y3ZlcmMyLjBjeDVjglkFvTCCBbkwggOhoAMCAQICEFi_MEVHLUXplpBHsaa-4cowDQYJKoZIhvcNAQELBQAwQjFAMD4GA1UE",
    "AxM3TkNVLUlOVEMtS0VZSUQtNkNBOURGNjJBMUFBRTIzRTBGRUI3QzNGNUVCOEU2MUVDQUMxN0NCNzAeFw0yMDA4MTExNjIy",
    "MTZaFw0yNTAzMjEyMDMwMDJaMAAwggEiMA0GCSqGSIb3DQEBAQUAA4IBDwAwggEKAoIBAQDFpjq-zGjwQYe3YAePGjdNawyr",
    "OAKR8MncS6HJ3xjPfgp2MMm_Brvjsv_l_H_H10zdtHtvso0661cbHRg06-u18Rxt3zCJNhVxm2kn0u3urJLDraqJySTUTbP2",
    "jhPG8jChx9Fx5LbNcwgd_wYdV3adc3SrQGn4W4DcYtF-nbHjZRoa70iih7GxghDvT4wBHRomOQdg2l5uMftmghyA42l1uA0d",
    "5YmXpHSzZYb9n6Va9cOcaVeTPdsuHb_8yXU2zwadYKEaJ6zlVeGs3PzygSIH4wgHcCoiSX0G8WQO1n2zP2qWbxPrOxiN2Yx9",
    "W0mYzq4A7Uj6z4p3j8vOc2FZ09v1AgMBAAGjggHrMIIB5zAOBgNVHQ8BAf8EBAMCB4AwDAYDVR0TAQH_BAIwADBtBgNVHSAB",
    "Af8EYzBhMF8GCSsGAQQBgjcVHzBSMFAGCCsGAQUFBwICMEQeQgBUAEMAUABBACAAIABUAHIAdQBzAHQAZQBkACAAIABQAGwA",
    "YQB0AGYAbwByAG0AIAAgAEkAZABlAG4AdABpAHQAeTAQBgNVHSUECTAHBgVngQUIAzBQBgNVHREBAf8ERjBEpEIwQDEWMBQG",
    "BWeBBQIBDAtpZDo0OTRFNTQ0MzEOMAwGBWeBBQICDANTUFQxFjAUBgVngQUCAwwLaWQ6MDAwMjAwMDAwHwYDVR0jBBgwFoAU",
    "k5NNQg63s6ECbnpxIwYQUuhYWLMwHQYDVR0OBBYEFKj7P636QIrZun7nTfKfxsM8bfvnMIGzBggrBgEFBQcBAQSBpjCBozCB",
    "oAYIKwYBBQUHMAKGgZNodHRwOi8vYXpjc3Byb2RuY3VhaWtwdWJsaXNoLmJsb2IuY29yZS53aW5kb3dzLm5ldC9uY3UtaW50",
    "Yy1rZXlpZC02Y2E5ZGY2MmExYWFlMjNlMGZlYjdjM2Y1ZWI4ZTYxZWNhYzE3Y2I3L2Q4ZTAyMThlLTc3ZWItNDNiOC1hOTgx",
    "LTMwNWNlY2M1Y2JhNi5jZXIwDQYJKoZIhvcNAQELBQADggIBAASAb74AXoWnAD3t6Li2_-5Nvcb4PwUFyjxifXmvsVL8VZpQ",
    "IKfG4ID7kQUgZdq6Jv-yP6czzT7Dp9uQBgtGDjuxsnT-g8fnS8w-dOcoL3CKGMKaLh4ZlUuLd6RBu9cYi6BM0nwQTRvhRvuJ",
    "A7Dl-DNso30k8LVoMWYqLKwO_y6DLwe0flRol4YqUZ86fiXgkXobb9XsfGG1cEsdISIH0qqLPxLBYl66iuHXLPJbTck8QgQb",
    "FlXk3zsq8qOk20uuW3ZzHdg1JXyhwg91kzJizcSJAfQafOy1uAViQL_RvUAAC9aZQAIkdO3ufC8vtvYUaQyovMDXGuRWRdQq",
    "RXnuSZuahcsebF641ltDTxZ2P2T5F1qOSF7uW5ogvzPALMXUrXefnEdg7yVESfdmWMuscfpK94FPE-uRX57WLCYc9NpWyl1J",
    "xNGFik0qOt1jcA1JLxZsopAvJNBykldNGE5ClFZbqWhoaol-rArVJRmzr_3z1K_wZwi0vmzGxyir46HoNZNt9F1x7UCzoE4j",
    "IgiIs7mw2wTGJq8GDOM3qMB6c3dfzfRpdO6J5CAECdv2MYO-QCVVbO-krVr-kv_8vOgouGxFmVG2Ea7CNPayTS8ypzgRUx9B",
    "d4-gcf5HIaZYNYDDBsEykE7ym-rnFJCEsZ-hXprNhU4U1o3mIXPAlFeXX0evWQbwMIIG7DCCBNSgAwIBAgITMwAAAnFSIjeD",
    "Cns4rgAAAAACcTANBgkqhkiG9w0BAQsFADCBjDELMAkGA1UEBhMCVVMxEzARBgNVBAgTCldhc2hpbmd0b24xEDAOBgNVBAcT",
    "B1JlZG1vbmQxHjAcBgNVBAoTFU1pY3Jvc29mdCBDb3Jwb3JhdGlvbjE2MDQGA1UEAxMtTWljcm9zb2Z0IFRQTSBSb290IENl",
    "cnRpZmljYXRlIEF1dGhvcml0eSAyMDE0MB4XDTE5MDMyMTIwMzAwMloXDTI1MDMyMTIwMzAwMlowQjFAMD4GA1UEAxM3TkNV",
    "LUlOVEMtS0VZSUQtNkNBOURGNjJBMUFBRTIzRTBGRUI3QzNGNUVCOEU2MUVDQUMxN0NCNzCCAiIwDQYJKoZIhvcNAQEBBQAD",
    "ggIPADCCAgoCggIBAJgra62xNaOjXZr4bN5QBXpX7PzhMjR5ER3oEj8HnLEil9ZcN5XM6IEymmmA3b6dwTQwQZda-jCgGYYu",
    "JE1-MIHmfay9nPeTH-8U5k4Ekns2ra_T-BJ9U24lQ5OYAHmwplf4HwOb6zWGCGnU9O-qKV63UY8iwXt9uzCVO2PwDyZsrMje",
    "Rj5iUKMgExq1v5yL-L5ugTjEMhBZj5YprO-IQZEAXd7iddC3dFWmXfcXJ6eCL0lxGmbFZNSwIo9iaQXOwni-yTFmxxmh5gu9",
    "V7xmqyw3wbTQrPrWwiSUcc5Qn3yH9_YzCsLM6CwhQLc_0eFIw8FHZa7xKtlc1nXHZUsqkZG7cZaKHD16n1aYKVNBUJ6lw2D_",
    "hyJaoUWtSsaTYFUoZIC_hwsbVpWVEme2bv9HL-PwDkKJ-9PdvyKdmOZ5wymUsNuGPrK1WQemb1FV3lXaYDB4h2N3PKrsIimt",
    "E1uMHNwUjEfsdQ3R-JOCTX0LbY4rX931mkj6mCRrTa-F9-lN4Xs12RAn2iwHYVkP8QcPuszjhLV4PtjoVC2O8VbR_v_QLVjy",
    "78YfNp-HjhE0jjp-UXbnF9EwC1DCfPjNULsMpntZr8nU76xNl2t_XKEl9tH9pgjmmQ42b63UCCo8sb9hghwzsiiBLrMYLRoZ",
    "Oz1eBJGVKj8x94h-Bc5msRwaVpQjAgMBAAGjggGOMIIBijAOBgNVHQ8BAf8EBAMCAoQwGwYDVR0lBBQwEgYJKwYBBAGCNxUk",
    "BgVngQUIAzAWBgNVHSAEDzANMAsGCSsGAQQBgjcVHzASBgNVHRMBAf8ECDAGAQH_AgEAMB0GA1UdDgQWBBSTk01CDrezoQJu",
    "enEjBhBS6FhYszAfBgNVHSMEGDAWgBR6jArOL0hiF-KU0a5VwVLscXSkVjBwBgNVHR8EaTBnMGWgY6Bhhl9odHRwOi8vd3d3",
    "Lm1pY3Jvc29mdC5jb20vcGtpb3BzL2NybC9NaWNyb3NvZnQlMjBUUE0lMjBSb290JTIwQ2VydGlmaWNhdGUlMjBBdXRob3Jp",
    "dHklMjAyMDE0LmNybDB9BggrBgEFBQcBAQRxMG8wbQYIKwYBBQUHMAKGYWh0dHA6Ly93d3cubWljcm9zb2Z0LmNvbS9wa2lv",
    "cHMvY2VydHMvTWljcm9zb2Z0JTIwVFBNJTIwUm9vdCUyMENlcnRpZmljYXRlJTIwQXV0aG9yaXR5JTIwMjAxNC5jcnQwDQYJ",
    "KoZIhvcNAQELBQADggIBAEnrpgcQWYMyQx9xsAkQ0ZLofNzsF_kQ1fb055P4jV2eoN6xoHPJEAvklxXRPr8mmV-yFMqWGKpV",
    "ZJtseMvyle1H_EeV9RLem_Y44nT1r8S7eQLUdcHemsmFEOirlf_WxtTFQSIbNxA2W_tfNI1x63eTTgH-w3vwC0-3i6ffY6zy",
    "5fwwfpIBqm_YwxoJt7IgxV45IQGlM3k_BDUkw2pFF_RKADRdLegPkOSiPSBJnJMLRet7rM-i5Oqg6sEjvUblfgM_sg_g62fL",
    "SiUlkl4re7M_2JaQx-D_eYQmPACrH-yo_quSdGMr67r5sIfDoDMn_M1MFr2N8MQCdMHTT0Y_DiU1quDzh_tVjppjejsAYNcG",
    "ysaJMnojwhGA14H53FXgGhgIyMYNaSBRCCLGId5PoTynafbD8gV-RRc2Tqa5_WuYpQ4Ins1RcRI9ZV4JJMvogtPmLdEDZAWf",
    "Q5gaX7x9XI37Pkgoy3RZDo0IeOgT61UjZRj3lcXXZBYlkD6tT3vGP4jsUfJa570pzIMOlkNsWHvSndj7IMFbUgNrx7Sb8wwX",
    "TaLn43hII15pqGYjGwDLaBPUS7GtJkSck-RQ13n6ozH1mwIPoDF1SmQrdyUaF2C8kJvTuaZ7-tPywXpDnyNCIZl66aC1vHL6",
    "RqViH6VUfi1qpN05ZJcXUS52-ytkycx5Z3B1YkFyZWFZATYAAQALAAYEcgAgnf_L82w4OuaZ-5ho3G3LidcVOIS-KAOSLBJB",
    "WL-tIq4AEAAQCAAAAAAAAQDcFPNy-45a7BHMtd8ISObReixaN2CGRRB9i3BRmuaF04ElS9DeRtLv0byYXd7emqnZoFrzh5cZ",
    "V_CyaneWWRffnlhrSGU9uIQTbpBrFrL8zjLPC7GJI4tE1JR5-TIjWTQvGhcGD3Obfzuo0MROfc0AYivf6UGJZwLjI1Fr9-a6",
    "bxsEOSrcIB21nwawtl6_3tTrPGVTVtnLl_v-28zDCkqTBRunf3WV9Z1cfALE1mv25KvlZNRDWNdLIbfHM6vS1UEtYGDiHYL-",
    "Olz8hc9pP5zQlY4JUwHB2fQjiSuKiYxS58OR1ea59WhpPo58Igmdp7zzcGj4PzITNa1FDCf8CUXfaGNlcnRJbmZvWKH_VENH",
    "gBcAIgALrkqYRgFXv5xgSrHdJYQGCGUjfNhVrVXDc4nC95E9UigAFOpikDGSJ2MvLFJzMEAomODjKj-FAAAAAtvXiSa7arcI",
    "ZJFqyAFWBdxRduqDjQAiAAvvNXD__Qy9qBD9CpVsBx_UjxWZBweZY0nNYVputngE-gAiAAv5SOBUEGCTxafDbrVNz5MQIkCL",
    "uXi-xNHVHQGITOvf92hhdXRoRGF0YVkBZ2wpgejnsqySxmYA_6D63eOJKMSO0N1z9i_GRS2layobRQAAAAAImHBYytxLgbbh",
    "MN5Q3L6WACDT-fhpMJuiYtRBevTtzsRr4nSI291iZbRtQa43r5x4YKQBAwM5AQAgWQEA3BTzcvuOWuwRzLXfCEjm0XosWjdg",
    "hkUQfYtwUZrmhdOBJUvQ3kbS79G8mF3e3pqp2aBa84eXGVfwsmp3llkX355Ya0hlPbiEE26Qaxay_M4yzwuxiSOLRNSUefky",
    "I1k0LxoXBg9zm387qNDETn3NAGIr3-lBiWcC4yNRa_fmum8bBDkq3CAdtZ8GsLZev97U6zxlU1bZy5f7_tvMwwpKkwUbp391",
    "lfWdXHwCxNZr9uSr5WTUQ1jXSyG3xzOr0tVBLWBg4h2C_jpc_IXPaT-c0JWOCVMBwdn0I4kriomMUufDkdXmufVoaT6OfCIJ",
    "nae883Bo-D8yEzWtRQwn_AlF3yFDAQAB",
);

pub const WINDOWS_HELLO_TPM_CLIENT_DATA: &str = concat!(
    "eyJ0eXBlIjoid2ViYXV0aG4uY3JlYXRlIiwiY2hhbGxlbmdlIjoiSWx5OXREWmNZTGdCeUp0YktxaWNYdjdmTWFtcnN3SkhX",
    "bnUwOUNXMkVUUSIsIm9yaWdpbiI6Imh0dHBzOi8vZXRvb2xzLWRldi5leGFtcGxlLmNvbTo4MDgwIiwiY3Jvc3NPcmlnaW4i",
    "OmZhbHNlfQ",
);

/// Apple format registration from Safari Touch ID.
pub const TOUCHID_APPLE_ATTESTATION_OBJECT: &str = concat!(
    "o2NmbXRlYXBwbGVnYXR0U3RtdKJjYWxnJmN4NWOCWQJHMIICQzCCAcmgAwIBAgIGAXZFUv6nMAoGCCqGSM49BAMCMEgxHDAa",
    "BgNVBAMME0FwcGxlIFdlYkF1dGhuIENBIDExEzARBgNVBAoMCkFwcGxlIEluYy4xEzARBgNVBAgMCkNhbGlmb3JuaWEwHhcN",
    "MjAxMjA4MDIyNzE1WhcNMjAxMjExMDIyNzE1WjCBkTFJMEcGA1UEAwxAOWFhOTBjN2M5MzZhNGUxYmI4Njg5NjVmMTQ3YTQz",
    "OTlmMTQwY2Y0MDliNDM0ZjkwNTliMmQ0ZjVhM2NmYzA5MjEaMBgGA1UECwwRQUFBIENlcnRpZmljYXRpb24xEzARBgNVBAoM",
    "CkFwcGxlIEluYy4xEzARBgNVBAgMCkNhbGlmb3JuaWEwWTATBgcqhkjOPQIBBggqhkjOPQMBBwNCAATU-GOH9U5e9ecWPuIt",
    "KNcE-7y0fRbshaHqTvtpC3eUkGn5x6eYrV6TOQL6FQUzdK7ZJ6AjDPl47TSUq4aKzRqto1UwUzAMBgNVHRMBAf8EAjAAMA4G",
    "A1UdDwEB_wQEAwIE8DAzBgkqhkiG92NkCAIEJjAkoSIEIKjioMU9kg_qZHwWHSISq1v9elHxtmnw0YKwsz1Ut06-MAoGCCqG",
    "SM49BAMCA2gAMGUCMA7yhkkMMAJnuIS7hHzMP5SoTuHjofCTu1rYQZ9aamb5OJzJ1rYPrbun83_qiikyPgIxAMYPCraOZ1QH",
    "EgDngtYaQDoRdkIOxvQ60wJh7KN0fEmmRUVwa-RTaFvNFMv6fh2-KlkCODCCAjQwggG6oAMCAQICEFYlU5XHp_tA6-Io2CYI",
    "U7YwCgYIKoZIzj0EAwMwSzEfMB0GA1UEAwwWQXBwbGUgV2ViQXV0aG4gUm9vdCBDQTETMBEGA1UECgwKQXBwbGUgSW5jLjET",
    "MBEGA1UECAwKQ2FsaWZvcm5pYTAeFw0yMDAzMTgxODM4MDFaFw0zMDAzMTMwMDAwMDBaMEgxHDAaBgNVBAMME0FwcGxlIFdl",
    "YkF1dGhuIENBIDExEzARBgNVBAoMCkFwcGxlIEluYy4xEzARBgNVBAgMCkNhbGlmb3JuaWEwdjAQBgcqhkjOPQIBBgUrgQQA",
    "IgNiAASDLocvJhSRgQIlufX81rtjeLX1Xz_LBFvHNZk0df1UkETfm_4ZIRdlxpod2gULONRQg0AaQ0-yTREtVsPhz7_LmJH-",
    "wGlggb75bLx3yI3dr0alruHdUVta-quTvpwLJpGjZjBkMBIGA1UdEwEB_wQIMAYBAf8CAQAwHwYDVR0jBBgwFoAUJtdk2cV4",
    "wlpn0afeaxLQG2PxxtcwHQYDVR0OBBYEFOuugsT_oaxbUdTPJGEFAL5jvXeIMA4GA1UdDwEB_wQEAwIBBjAKBggqhkjOPQQD",
    "AwNoADBlAjEA3YsaNIGl-tnbtOdle4QeFEwnt1uHakGGwrFHV1Azcifv5VRFfvZIlQxjLlxIPnDBAjAsimBE3CAfz-Wbw00p",
    "MMFIeFHZYO1qdfHrSsq-OM0luJfQyAW-8Mf3iwelccboDgdoYXV0aERhdGFYmNoUsfKpHi3fFS3-SiJ9vGALAUcpOl78tKnz",
    "0RXnirZbRQAAAAAAAAAAAAAAAAAAAAAAAAAAABS7-2WIV_5pdEuD1cjP5K5DRcGVsaUBAgMmIAEhWCDU-GOH9U5e9ecWPuIt",
    "KNcE-7y0fRbshaHqTvtpC3eUkCJYIGn5x6eYrV6TOQL6FQUzdK7ZJ6AjDPl47TSUq4aKzRqt",
);

pub const TOUCHID_APPLE_CLIENT_DATA: &str = concat!(
    "eyJ0eXBlIjoid2ViYXV0aG4uY3JlYXRlIiwiY2hhbGxlbmdlIjoiSlRiazd5ZWtJS09aUXd3ZEdXN05lRElmeHJZSzBQdnVZ",
    "eHN1ZS0tRzlOSSIsIm9yaWdpbiI6Imh0dHBzOi8vc3BlY3RyYWwubG9jYWw6ODQ0MyJ9",
);

/// The Yubico U2F root that signs the Yubikey attestation certificates above.
pub const YUBICO_U2F_ROOT_CA_SERIAL_457200631_PEM: &[u8] = b"-----BEGIN CERTIFICATE-----
MIIDHjCCAgagAwIBAgIEG0BT9zANBgkqhkiG9w0BAQsFADAuMSwwKgYDVQQDEyNZ
dWJpY28gVTJGIFJvb3QgQ0EgU2VyaWFsIDQ1NzIwMDYzMTAgFw0xNDA4MDEwMDAw
MDBaGA8yMDUwMDkwNDAwMDAwMFowLjEsMCoGA1UEAxMjWXViaWNvIFUyRiBSb290
IENBIFNlcmlhbCA0NTcyMDA2MzEwggEiMA0GCSqGSIb3DQEBAQUAA4IBDwAwggEK
AoIBAQC/jwYuhBVlqaiYWEMsrWFisgJ+PtM91eSrpI4TK7U53mwCIawSDHy8vUmk
5N2KAj9abvT9NP5SMS1hQi3usxoYGonXQgfO6ZXyUA9a+KAkqdFnBnlyugSeCOep
8EdZFfsaRFtMjkwz5Gcz2Py4vIYvCdMHPtwaz0bVuzneueIEz6TnQjE63Rdt2zbw
nebwTG5ZybeWSwbzy+BJ34ZHcUhPAY89yJQXuE0IzMZFcEBbPNRbWECRKgjq//qT
9nmDOFVlSRCt2wiqPSzluwn+v+suQEBsUjTGMEd25tKXXTkNW21wIWbxeSyUoTXw
LvGS6xlwQSgNpk2qXYwf8iXg7VWZAgMBAAGjQjBAMB0GA1UdDgQWBBQgIvz0bNGJ
hjgpToksyKpP9xv9oDAPBgNVHRMECDAGAQH/AgEAMA4GA1UdDwEB/wQEAwIBBjAN
BgkqhkiG9w0BAQsFAAOCAQEAjvjuOMDSa+JXFCLyBKsycXtBVZsJ4Ue3LbaEsPY4
MYN/hIQ5ZM5p7EjfcnMG4CtYkNsfNHc0AhBLdq45rnT87q/6O3vUEtNMafbhU6kt
hX7Y+9XFN9NpmYxr+ekVY5xOxi8h9JDIgoMP4VB1uS0aunL1IGqrNooL9mmFnL2k
LVVee6/VR6C5+KSTCMCWppMuJIZII2v9o4dkoZ8Y7QRjQlLfYzd3qGtKbw7xaF1U
sG/5xUb/Btwb2X2g4InpiB/yt/3CpQXpiWX/K4mBvUKiGn05ZsqeY1gx4g0xLBqc
U9psmyPzK+Vsgw2jeRQ5JlKDyqE0hebfC1tvFu0CCrJFcw==
-----END CERTIFICATE-----";
