use super::MetricDescriptor;

const fn gauge(
    key: &'static str,
    name: &'static str,
    help: &'static str,
) -> (&'static str, MetricDescriptor) {
    (key, MetricDescriptor::gauge(name, help))
}

/// Statistics printed by `rec_control get-all` on PowerDNS Recursor 4.x.
#[rustfmt::skip]
pub(super) const DESCRIPTORS: &[(&str, MetricDescriptor)] = &[
    gauge("all-outqueries", "pdns_recursor_all_outqueries", "Number of outgoing UDP queries since starting"),
    gauge("answers-slow", "pdns_recursor_answers_slow", "Number of queries answered after 1 second"),
    gauge("answers0-1", "pdns_recursor_answers0_1", "Number of queries answered within 1 millisecond"),
    gauge("answers1-10", "pdns_recursor_answers1_10", "Number of queries answered within 10 milliseconds"),
    gauge("answers10-100", "pdns_recursor_answers10_100", "Number of queries answered within 100 milliseconds"),
    gauge("answers100-1000", "pdns_recursor_answers100_1000", "Number of queries answered within 1 second"),
    gauge("auth-zone-queries", "pdns_recursor_auth_zone_queries", "Number of queries to locally hosted authoritative zones"),
    gauge("auth4-answers-slow", "pdns_recursor_auth4_answers_slow", "Number of IPv4 queries answered by authoritatives after 1 second"),
    gauge("auth4-answers0-1", "pdns_recursor_auth4_answers0_1", "Number of IPv4 queries answered by authoritatives within 1 millisecond"),
    gauge("auth4-answers1-10", "pdns_recursor_auth4_answers1_10", "Number of IPv4 queries answered by authoritatives within 10 milliseconds"),
    gauge("auth4-answers10-100", "pdns_recursor_auth4_answers10_100", "Number of IPv4 queries answered by authoritatives within 100 milliseconds"),
    gauge("auth4-answers100-1000", "pdns_recursor_auth4_answers100_1000", "Number of IPv4 queries answered by authoritatives within 1 second"),
    gauge("auth6-answers-slow", "pdns_recursor_auth6_answers_slow", "Number of IPv6 queries answered by authoritatives after 1 second"),
    gauge("auth6-answers0-1", "pdns_recursor_auth6_answers0_1", "Number of IPv6 queries answered by authoritatives within 1 millisecond"),
    gauge("auth6-answers1-10", "pdns_recursor_auth6_answers1_10", "Number of IPv6 queries answered by authoritatives within 10 milliseconds"),
    gauge("auth6-answers10-100", "pdns_recursor_auth6_answers10_100", "Number of IPv6 queries answered by authoritatives within 100 milliseconds"),
    gauge("auth6-answers100-1000", "pdns_recursor_auth6_answers100_1000", "Number of IPv6 queries answered by authoritatives within 1 second"),
    gauge("cache-entries", "pdns_recursor_cache_entries", "Number of entries in the record cache"),
    gauge("cache-hits", "pdns_recursor_cache_hits", "Number of record cache hits"),
    gauge("cache-misses", "pdns_recursor_cache_misses", "Number of record cache misses"),
    gauge("case-mismatches", "pdns_recursor_case_mismatches", "Number of mismatches in character case since starting"),
    gauge("chain-resends", "pdns_recursor_chain_resends", "Number of queries chained to existing outstanding queries"),
    gauge("client-parse-errors", "pdns_recursor_client_parse_errors", "Number of client packets that could not be parsed"),
    gauge("concurrent-queries", "pdns_recursor_concurrent_queries", "Number of MThreads currently running"),
    gauge("dlg-only-drops", "pdns_recursor_dlg_only_drops", "Number of records dropped because of delegation-only setting"),
    gauge("dnssec-queries", "pdns_recursor_dnssec_queries", "Number of queries received with the DO bit set"),
    gauge("dnssec-result-bogus", "pdns_recursor_dnssec_result_bogus", "Number of DNSSEC validations that had the Bogus state"),
    gauge("dnssec-result-indeterminate", "pdns_recursor_dnssec_result_indeterminate", "Number of DNSSEC validations that had the Indeterminate state"),
    gauge("dnssec-result-insecure", "pdns_recursor_dnssec_result_insecure", "Number of DNSSEC validations that had the Insecure state"),
    gauge("dnssec-result-nta", "pdns_recursor_dnssec_result_nta", "Number of DNSSEC validations that had the NTA (negative trust anchor) state"),
    gauge("dnssec-result-secure", "pdns_recursor_dnssec_result_secure", "Number of DNSSEC validations that had the Secure state"),
    gauge("dnssec-validations", "pdns_recursor_dnssec_validations", "Number of DNSSEC validations performed"),
    gauge("dont-outqueries", "pdns_recursor_dont_outqueries", "Number of outgoing queries dropped because of dont-query setting"),
    gauge("ecs-queries", "pdns_recursor_ecs_queries", "Number of outgoing queries adorned with an EDNS Client Subnet option"),
    gauge("ecs-responses", "pdns_recursor_ecs_responses", "Number of responses received from authoritative servers with an EDNS Client Subnet option"),
    gauge("edns-ping-matches", "pdns_recursor_edns_ping_matches", "Number of servers that sent a valid EDNS PING response"),
    gauge("edns-ping-mismatches", "pdns_recursor_edns_ping_mismatches", "Number of servers that sent an invalid EDNS PING response"),
    gauge("failed-host-entries", "pdns_recursor_failed_host_entries", "Number of servers that failed to resolve"),
    gauge("fd-usage", "pdns_recursor_fd_usage", "Number of open file descriptors"),
    gauge("ignored-packets", "pdns_recursor_ignored_packets", "Number of non-query packets received on server sockets that should only get queries"),
    gauge("ipv6-outqueries", "pdns_recursor_ipv6_outqueries", "Number of outgoing queries over IPv6"),
    gauge("ipv6-questions", "pdns_recursor_ipv6_questions", "Number of end-user initiated queries with the RD bit set, received over IPv6 UDP"),
    gauge("malloc-bytes", "pdns_recursor_malloc_bytes", "Number of bytes allocated by the process"),
    gauge("max-cache-entries", "pdns_recursor_max_cache_entries", "Currently configured maximum number of cache entries"),
    gauge("max-mthread-stack", "pdns_recursor_max_mthread_stack", "Maximum amount of thread stack ever used"),
    gauge("max-packetcache-entries", "pdns_recursor_max_packetcache_entries", "Currently configured maximum number of packet cache entries"),
    gauge("negcache-entries", "pdns_recursor_negcache_entries", "Number of entries in the negative answer cache"),
    gauge("no-packet-error", "pdns_recursor_no_packet_error", "Number of erroneous received packets"),
    gauge("noedns-outqueries", "pdns_recursor_noedns_outqueries", "Number of queries sent out without EDNS"),
    gauge("noerror-answers", "pdns_recursor_noerror_answers", "Number of NOERROR answers since starting"),
    gauge("noping-outqueries", "pdns_recursor_noping_outqueries", "Number of queries sent out without EDNS PING"),
    gauge("nsset-invalidations", "pdns_recursor_nsset_invalidations", "Number of times an nsset was dropped because it no longer worked"),
    gauge("nsspeeds-entries", "pdns_recursor_nsspeeds_entries", "Number of entries in the NS speeds map"),
    gauge("nxdomain-answers", "pdns_recursor_nxdomain_answers", "Number of NXDOMAIN answers since starting"),
    gauge("outgoing-timeouts", "pdns_recursor_outgoing_timeouts", "Number of timeouts on outgoing UDP queries since starting"),
    gauge("outgoing4-timeouts", "pdns_recursor_outgoing4_timeouts", "Number of timeouts on outgoing UDP IPv4 queries since starting"),
    gauge("outgoing6-timeouts", "pdns_recursor_outgoing6_timeouts", "Number of timeouts on outgoing UDP IPv6 queries since starting"),
    gauge("over-capacity-drops", "pdns_recursor_over_capacity_drops", "Number of questions dropped because over maximum concurrent query limit"),
    gauge("packetcache-entries", "pdns_recursor_packetcache_entries", "Number of entries in the packet cache"),
    gauge("packetcache-hits", "pdns_recursor_packetcache_hits", "Number of packet cache hits"),
    gauge("packetcache-misses", "pdns_recursor_packetcache_misses", "Number of packet cache misses"),
    gauge("policy-drops", "pdns_recursor_policy_drops", "Number of packets dropped because of (Lua) policy decision"),
    gauge("policy-result-custom", "pdns_recursor_policy_result_custom", "Number of packets that were sent a custom answer by the RPZ/filter engine"),
    gauge("policy-result-drop", "pdns_recursor_policy_result_drop", "Number of packets that were dropped by the RPZ/filter engine"),
    gauge("policy-result-noaction", "pdns_recursor_policy_result_noaction", "Number of packets that were not acted upon by the RPZ/filter engine"),
    gauge("policy-result-nodata", "pdns_recursor_policy_result_nodata", "Number of packets that were replied to with no data by the RPZ/filter engine"),
    gauge("policy-result-nxdomain", "pdns_recursor_policy_result_nxdomain", "Number of packets that were replied to with NXDOMAIN by the RPZ/filter engine"),
    gauge("policy-result-truncate", "pdns_recursor_policy_result_truncate", "Number of packets that were forced to TCP by the RPZ/filter engine"),
    gauge("qa-latency", "pdns_recursor_qa_latency", "Shows the current latency average, in microseconds, exponentially weighted over past packets"),
    gauge("query-pipe-full-drops", "pdns_recursor_query_pipe_full_drops", "Number of questions dropped because the query distribution pipe was full"),
    gauge("questions", "pdns_recursor_questions", "Counts all end-user initiated queries with the RD bit set"),
    gauge("real-memory-usage", "pdns_recursor_real_memory_usage", "Number of bytes of real process memory used"),
    gauge("resource-limits", "pdns_recursor_resource_limits", "Number of queries that could not be performed because of resource limits"),
    gauge("security-status", "pdns_recursor_security_status", "Security status based on security polling"),
    gauge("server-parse-errors", "pdns_recursor_server_parse_errors", "Number of server replied packets that could not be parsed"),
    gauge("servfail-answers", "pdns_recursor_servfail_answers", "Number of SERVFAIL answers since starting"),
    gauge("spoof-prevents", "pdns_recursor_spoof_prevents", "Number of times PowerDNS considered itself spoofed, and dropped the data"),
    gauge("sys-msec", "pdns_recursor_sys_msec", "Number of CPU milliseconds spent in system mode"),
    gauge("tcp-client-overflow", "pdns_recursor_tcp_client_overflow", "Number of times an IP address was denied TCP access because it already had too many connections"),
    gauge("tcp-clients", "pdns_recursor_tcp_clients", "Number of currently active TCP/IP clients"),
    gauge("tcp-outqueries", "pdns_recursor_tcp_outqueries", "Number of outgoing TCP queries since starting"),
    gauge("tcp-questions", "pdns_recursor_tcp_questions", "Number of all incoming TCP queries since starting"),
    gauge("throttle-entries", "pdns_recursor_throttle_entries", "Number of entries in the throttle map"),
    gauge("throttled-out", "pdns_recursor_throttled_out", "Number of throttled outgoing UDP queries since starting"),
    gauge("throttled-outqueries", "pdns_recursor_throttled_outqueries", "Number of throttled outgoing UDP queries since starting"),
    gauge("too-old-drops", "pdns_recursor_too_old_drops", "Number of questions dropped that were too old"),
    gauge("truncated-drops", "pdns_recursor_truncated_drops", "Number of questions dropped because they were larger than 512 bytes"),
    gauge("udp-in-errors", "pdns_recursor_udp_in_errors", "Number of packets received faster than the OS could process them"),
    gauge("udp-noport-errors", "pdns_recursor_udp_noport_errors", "Number of UDP packets where an ICMP response was received that the remote port was not listening"),
    gauge("udp-recvbuf-errors", "pdns_recursor_udp_recvbuf_errors", "Number of UDP packets dropped because of a full receive buffer"),
    gauge("udp-sndbuf-errors", "pdns_recursor_udp_sndbuf_errors", "Number of UDP packets dropped because of a full send buffer"),
    gauge("unauthorized-tcp", "pdns_recursor_unauthorized_tcp", "Number of TCP questions denied because of allow-from restrictions"),
    gauge("unauthorized-udp", "pdns_recursor_unauthorized_udp", "Number of UDP questions denied because of allow-from restrictions"),
    gauge("unexpected-packets", "pdns_recursor_unexpected_packets", "Number of answers from remote servers that were unexpected"),
    gauge("unreachables", "pdns_recursor_unreachables", "Number of times nameservers were unreachable since starting"),
    gauge("uptime", "pdns_recursor_uptime", "Number of seconds the process has been running"),
    gauge("user-msec", "pdns_recursor_user_msec", "Number of CPU milliseconds spent in user mode"),
    gauge("variable-responses", "pdns_recursor_variable_responses", "Number of responses that were marked as variable"),
    gauge("x-our-latency", "pdns_recursor_x_our_latency", "Shows the averaged time spent within PowerDNS, in microseconds"),
    gauge("x-ourtime-slow", "pdns_recursor_x_ourtime_slow", "Counts responses where more than 32 milliseconds was spent within the recursor"),
    gauge("x-ourtime0-1", "pdns_recursor_x_ourtime0_1", "Counts responses where between 0 and 1 milliseconds was spent within the recursor"),
    gauge("x-ourtime1-2", "pdns_recursor_x_ourtime1_2", "Counts responses where between 1 and 2 milliseconds was spent within the recursor"),
    gauge("x-ourtime2-4", "pdns_recursor_x_ourtime2_4", "Counts responses where between 2 and 4 milliseconds was spent within the recursor"),
    gauge("x-ourtime4-8", "pdns_recursor_x_ourtime4_8", "Counts responses where between 4 and 8 milliseconds was spent within the recursor"),
    gauge("x-ourtime8-16", "pdns_recursor_x_ourtime8_16", "Counts responses where between 8 and 16 milliseconds was spent within the recursor"),
    gauge("x-ourtime16-32", "pdns_recursor_x_ourtime16_32", "Counts responses where between 16 and 32 milliseconds was spent within the recursor"),
];
